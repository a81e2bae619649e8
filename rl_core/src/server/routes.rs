pub enum ApiPath {
    Static(&'static str),
}

impl ApiPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiPath::Static(s) => s,
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiSuggestion {
    Create,
}

impl BackendApiSuggestion {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiSuggestion::Create => ApiPath::Static("/suggestions"),
        }
    }
}

pub fn all_backend_api_paths() -> Vec<(&'static str, ApiPath)> {
    [BackendApiSuggestion::Create]
        .into_iter()
        .map(|suggestion| ("POST", suggestion.path()))
        .collect()
}
