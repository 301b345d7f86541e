// ── In-memory router for unit tests ──
//
// Behaves like the REST API at the level the core cares about: rows per
// menu path, `*N` identifiers, name clashes rejected, unknown ids rejected.
// Every call is recorded so tests can assert on exactly what was sent.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::Mutex;

use hotspotctl_api::{Error, Fields, ID_FIELD, ResourceClient, ResourcePath, Row};
use serde_json::Value;

/// One recorded collaborator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    List(&'static str),
    Add(&'static str, Fields),
    Set(&'static str, String, Fields),
    Remove(&'static str, String),
}

impl Call {
    pub(crate) fn is_mutation(&self) -> bool {
        !matches!(self, Self::List(_))
    }
}

#[derive(Default)]
struct State {
    rows: HashMap<&'static str, Vec<Row>>,
    calls: Vec<Call>,
    next_id: u32,
    adds: usize,
    fail_add_at: Option<usize>,
    refuse_login: bool,
}

#[derive(Default)]
pub(crate) struct FakeRouter {
    state: Mutex<State>,
}

fn trap(status: u16, detail: &str) -> Error {
    Error::Trap {
        status,
        message: "Bad Request".into(),
        detail: Some(detail.into()),
    }
}

impl FakeRouter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Seed a collection. Rows without `.id` get one assigned.
    pub(crate) fn with_rows(self, path: ResourcePath, rows: Value) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let rows: Vec<Row> = serde_json::from_value(rows).unwrap();
            for mut row in rows {
                if !row.contains_key(ID_FIELD) {
                    let id = state.assign_id();
                    row.insert(ID_FIELD.into(), Value::String(id));
                }
                state.rows.entry(path.as_str()).or_default().push(row);
            }
        }
        self
    }

    /// Make the `n`th `add` call (1-based) fail with a trap.
    pub(crate) fn failing_add(self, n: usize) -> Self {
        self.state.lock().unwrap().fail_add_at = Some(n);
        self
    }

    /// Answer every call with an authentication failure.
    pub(crate) fn refusing_login(self) -> Self {
        self.state.lock().unwrap().refuse_login = true;
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub(crate) fn rows(&self, path: ResourcePath) -> Vec<Row> {
        self.state
            .lock()
            .unwrap()
            .rows
            .get(path.as_str())
            .cloned()
            .unwrap_or_default()
    }
}

impl State {
    fn assign_id(&mut self) -> String {
        self.next_id += 1;
        format!("*{:X}", self.next_id)
    }

    fn gate(&mut self, call: Call) -> Result<(), Error> {
        self.calls.push(call);
        if self.refuse_login {
            return Err(Error::Authentication {
                message: "invalid user name or password".into(),
            });
        }
        Ok(())
    }

    fn position(&self, path: &str, id: &str) -> Option<usize> {
        self.rows.get(path)?.iter().position(|row| {
            row.get(ID_FIELD).and_then(Value::as_str) == Some(id)
        })
    }
}

impl ResourceClient for FakeRouter {
    async fn list(&self, path: ResourcePath) -> Result<Vec<Row>, Error> {
        let mut state = self.state.lock().unwrap();
        state.gate(Call::List(path.as_str()))?;
        Ok(state.rows.get(path.as_str()).cloned().unwrap_or_default())
    }

    async fn add(&self, path: ResourcePath, fields: &Fields) -> Result<Option<String>, Error> {
        let mut state = self.state.lock().unwrap();
        state.gate(Call::Add(path.as_str(), fields.clone()))?;

        state.adds += 1;
        if state.fail_add_at == Some(state.adds) {
            return Err(trap(400, "failure: injected"));
        }

        let clash = fields.get("name").is_some_and(|name| {
            state.rows.get(path.as_str()).is_some_and(|rows| {
                rows.iter()
                    .any(|row| row.get("name").and_then(Value::as_str) == Some(name.as_str()))
            })
        });
        if clash {
            return Err(trap(400, "failure: already have such name"));
        }

        let id = state.assign_id();
        let mut row: Row = fields
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        row.insert(ID_FIELD.into(), Value::String(id.clone()));
        state.rows.entry(path.as_str()).or_default().push(row);
        Ok(Some(id))
    }

    async fn set(&self, path: ResourcePath, id: &str, fields: &Fields) -> Result<(), Error> {
        let mut state = self.state.lock().unwrap();
        state.gate(Call::Set(path.as_str(), id.to_owned(), fields.clone()))?;

        let Some(pos) = state.position(path.as_str(), id) else {
            return Err(trap(404, "no such item"));
        };
        let row = &mut state.rows.get_mut(path.as_str()).unwrap()[pos];
        for (k, v) in fields {
            row.insert(k.clone(), Value::String(v.clone()));
        }
        Ok(())
    }

    async fn remove(&self, path: ResourcePath, id: &str) -> Result<(), Error> {
        let mut state = self.state.lock().unwrap();
        state.gate(Call::Remove(path.as_str(), id.to_owned()))?;

        let Some(pos) = state.position(path.as_str(), id) else {
            return Err(trap(404, "no such item"));
        };
        state.rows.get_mut(path.as_str()).unwrap().remove(pos);
        Ok(())
    }
}
