//! Navigation targets.

use std::fmt;
use std::str::FromStr;

use roster_model::EmployeeId;
use thiserror::Error;

/// A page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// `/`
    #[default]
    List,
    /// `/create`
    Create,
    /// `/edit/{id}`
    Edit(EmployeeId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no page at '{0}'")]
    Unknown(String),
    #[error("invalid employee id '{id}' in '{path}'")]
    InvalidId { path: String, id: String },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Create => "/create".to_string(),
            Route::Edit(id) => format!("/edit/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Ok(Route::List),
            "/create" => Ok(Route::Create),
            _ => {
                let Some(id) = trimmed.strip_prefix("/edit/") else {
                    return Err(RouteError::Unknown(path.to_string()));
                };
                id.parse::<EmployeeId>()
                    .map(Route::Edit)
                    .map_err(|_| RouteError::InvalidId {
                        path: path.to_string(),
                        id: id.to_string(),
                    })
            }
        }
    }
}
