use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to build Notion HTTP client: {source}, location: {location}"))]
    BuildHttpClient {
        #[snafu(implicit)]
        location: Location,
        source: reqwest::Error,
    },

    #[snafu(display("Failed to query Notion database {database_id}: {source}, location: {location}"))]
    QueryDatabase {
        #[snafu(implicit)]
        location: Location,
        database_id: String,
        source: reqwest::Error,
    },

    #[snafu(display("Failed to update Notion page {page_id}: {source}, location: {location}"))]
    UpdatePage {
        #[snafu(implicit)]
        location: Location,
        page_id: String,
        source: reqwest::Error,
    },

    #[snafu(display("Notion API answered {status} for {endpoint}: {body}"))]
    UnexpectedStatus { endpoint: String, status: u16, body: String },

    #[snafu(display("Failed to decode Notion response from {endpoint}: {source}"))]
    DecodeResponse { endpoint: String, source: reqwest::Error },
}
