use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CacheError {
    #[snafu(display("invalid argument: {}", reason))]
    InvalidArgument { reason: String },
}

pub type Result<T> = std::result::Result<T, CacheError>;
