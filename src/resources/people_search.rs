use crate::{
    client::Client,
    config::Config,
    dispatch::DispatchOptions,
    error::EnrichError,
    transport::Transport,
    types::people::{FindEmployeesRequest, FindEmployeesResponse},
};

/// API resource for the `/find-employees` endpoint
pub struct PeopleSearch<'c, C: Config, T: Transport> {
    client: &'c Client<C, T>,
}

impl<'c, C: Config, T: Transport> PeopleSearch<'c, C, T> {
    /// Creates a new `PeopleSearch` resource
    #[must_use]
    pub const fn new(client: &'c Client<C, T>) -> Self {
        Self { client }
    }

    /// Searches people at a company domain
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails to send or the API returns an
    /// error.
    pub async fn find_employees(
        &self,
        req: &FindEmployeesRequest,
    ) -> Result<FindEmployeesResponse, EnrichError> {
        self.client.post("/find-employees", req).await
    }

    /// Like [`find_employees`](Self::find_employees) with per-call dispatch
    /// options.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, times out, or is cancelled.
    pub async fn find_employees_with(
        &self,
        req: &FindEmployeesRequest,
        opts: DispatchOptions,
    ) -> Result<FindEmployeesResponse, EnrichError> {
        self.client.post_with("/find-employees", req, opts).await
    }
}

impl<C: Config, T: Transport> Client<C, T> {
    /// Returns the people search resource
    #[must_use]
    pub const fn people_search(&self) -> PeopleSearch<'_, C, T> {
        PeopleSearch::new(self)
    }
}
