use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Reminder window must not be negative, got {minutes} minutes"))]
    NegativeWindow { minutes: i64 },

    #[snafu(display("Reminder window of {minutes} minutes is out of range"))]
    WindowOutOfRange { minutes: i64 },

    #[snafu(display("Field mapping has an empty property name for `{field}`"))]
    EmptyPropertyName { field: &'static str },
}
