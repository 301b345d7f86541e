// ── Voucher batch creation ──
//
// A batch is N sequential {draw credential, create hotspot user} steps.
// The router has no transactions: when step k fails, steps 1..k-1 already
// exist on the device and are left there. The caller gets a
// `BatchAborted` carrying that count and no voucher data, and should re-list
// hotspot users to reconcile.

use std::collections::HashSet;

use hotspotctl_api::{Fields, ResourceClient, ResourcePath};
use rand::RngCore;
use tracing::{debug, info, warn};

use crate::command::CreateVouchersRequest;
use crate::credentials::{Credential, CredentialGenerator};
use crate::error::{CoreError, RemoteResultExt};
use crate::model::Voucher;

/// Create `request.count` vouchers, in order, or none from the caller's
/// point of view.
pub async fn create_batch<C, R>(
    client: &C,
    request: &CreateVouchersRequest,
    generator: &mut CredentialGenerator<R>,
) -> Result<Vec<Voucher>, CoreError>
where
    C: ResourceClient,
    R: RngCore,
{
    if request.count == 0 {
        return Err(CoreError::invalid("voucher count must be at least 1"));
    }
    if request.profile.trim().is_empty() {
        return Err(CoreError::invalid("voucher profile must not be empty"));
    }
    let requested = usize::try_from(request.count)
        .map_err(|_| CoreError::invalid("voucher count is too large"))?;
    let duration = request.duration();

    let mut issued: HashSet<String> = HashSet::with_capacity(requested);
    let mut vouchers = Vec::with_capacity(requested);

    while vouchers.len() < requested {
        let created = vouchers.len();
        let step = async {
            let credential = generator.generate_unique(&issued)?;
            let fields = voucher_fields(&credential, &request.profile, duration);
            debug!(username = %credential.username, "creating voucher");
            client
                .add(ResourcePath::HOTSPOT_USERS, &fields)
                .await
                .during("create voucher")?;
            Ok::<_, CoreError>(credential)
        };

        let credential = match step.await {
            Ok(credential) => credential,
            Err(source) => {
                warn!(
                    created,
                    requested,
                    error = %source,
                    "voucher batch aborted; created vouchers were not rolled back"
                );
                return Err(CoreError::BatchAborted {
                    created,
                    requested,
                    source: Box::new(source),
                });
            }
        };

        issued.insert(credential.username.clone());
        vouchers.push(Voucher {
            username: credential.username,
            password: credential.password,
            profile: request.profile.clone(),
            duration: duration.map(str::to_owned),
        });
    }

    info!(count = vouchers.len(), profile = %request.profile, "voucher batch created");
    Ok(vouchers)
}

fn voucher_fields(credential: &Credential, profile: &str, duration: Option<&str>) -> Fields {
    let mut fields = Fields::new();
    fields.insert("name".into(), credential.username.clone());
    fields.insert("password".into(), credential.password.clone());
    fields.insert("profile".into(), profile.to_owned());
    if let Some(d) = duration {
        fields.insert("limit-uptime".into(), d.to_owned());
    }
    fields
}
