use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/spin")]
    Spin,
    #[at("/spin/edit")]
    Edit,
    #[at("/spin/history")]
    History,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Route actually rendered; the bare root shows the wheel.
    #[must_use]
    pub const fn canonical(&self) -> Self {
        match self {
            Self::Home | Self::Spin => Self::Spin,
            Self::Edit => Self::Edit,
            Self::History => Self::History,
            Self::NotFound => Self::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_the_page_layout() {
        assert_eq!(Route::Spin.to_path(), "/spin");
        assert_eq!(Route::Edit.to_path(), "/spin/edit");
        assert_eq!(Route::History.to_path(), "/spin/history");
        assert_eq!(Route::recognize("/spin/history"), Some(Route::History));
    }

    #[test]
    fn root_is_the_wheel() {
        assert_eq!(Route::Home.canonical(), Route::Spin);
        assert_eq!(Route::Edit.canonical(), Route::Edit);
    }
}
