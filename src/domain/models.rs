use serde::{Deserialize, Serialize};

/// Value both pickers hold while nothing has been chosen.
pub const UNSELECTED: &str = "0";

/// Name of the screen that receives the selection on submit.
pub const POINTS_ROUTE: &str = "Points";

/// One entry of a dropdown.
///
/// `key` identifies the entry, `value` is what gets stored when the entry is
/// picked and `label` is what the user reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub key: String,
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(key: impl Into<String>, value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A federative unit as returned by `GET /estados`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StateRecord {
    pub sigla: String,
}

impl From<StateRecord> for SelectOption {
    fn from(state: StateRecord) -> Self {
        Self::new(state.sigla.clone(), state.sigla.clone(), state.sigla)
    }
}

/// A municipality as returned by `GET /estados/{uf}/municipios`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CityRecord {
    pub id: u64,
    pub nome: String,
}

impl From<CityRecord> for SelectOption {
    // The city name is the selection payload, the numeric id only keys the entry.
    fn from(city: CityRecord) -> Self {
        Self::new(city.id.to_string(), city.nome.clone(), city.nome)
    }
}

/// Payload handed to the next screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteParams {
    pub uf: String,
    pub city: String,
}

impl Default for RouteParams {
    fn default() -> Self {
        Self {
            uf: UNSELECTED.to_string(),
            city: UNSELECTED.to_string(),
        }
    }
}

/// A named route transition together with its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub route: String,
    pub params: RouteParams,
}

impl Route {
    pub fn points(params: RouteParams) -> Self {
        Self {
            route: POINTS_ROUTE.to_string(),
            params,
        }
    }
}
