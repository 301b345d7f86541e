//! Profile selection and CLI flag overrides on top of `hotspotctl-config`.

use hotspotctl_config::{
    Config, Profile, SystemSecrets, config_path, load_config_or_default, profile_to_router_config,
};
use hotspotctl_core::RouterConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Flag/env profile name, then the config's default, then `"default"`.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a `RouterConfig` from the config file, active profile and CLI overrides.
pub fn build_router_config(global: &GlobalOpts) -> Result<RouterConfig, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    let mut profile = match cfg.profiles.get(&profile_name) {
        Some(profile) => profile.clone(),
        // No profile: flags and env vars alone must name the router
        None => match global.router.as_deref() {
            Some(router) => Profile {
                router: router.into(),
                ..Profile::default()
            },
            None if global.profile.is_some() && !cfg.profiles.is_empty() => {
                return Err(CliError::ProfileNotFound {
                    name: profile_name,
                    available: cfg.available_profiles(),
                });
            }
            None => {
                return Err(CliError::NoConfig {
                    path: config_path().display().to_string(),
                });
            }
        },
    };

    apply_overrides(&mut profile, global);
    Ok(profile_to_router_config(
        &profile,
        &profile_name,
        &cfg.defaults,
        &SystemSecrets,
    )?)
}

/// Flag > env > profile.
fn apply_overrides(profile: &mut Profile, global: &GlobalOpts) {
    if let Some(ref router) = global.router {
        profile.router.clone_from(router);
    }
    if global.username.is_some() {
        profile.username.clone_from(&global.username);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if global.timeout.is_some() {
        profile.timeout = global.timeout;
    }
}
