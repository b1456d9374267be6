use crate::res::resource::ResourceId;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Resource {} has been loaded already.", _0)]
    DuplicateIdentifier(ResourceId),
    #[fail(display = "No storage registered for file extension '{}'.", _0)]
    UnregisteredExtension(String),
    #[fail(display = "No storage registered for manifest prefix '{}'.", _0)]
    UnregisteredPrefix(String),
    #[fail(display = "{}", _0)]
    IO(#[cause] ::std::io::Error),
    #[fail(display = "Manifest entry '{}' is malformed: {}.", _0, _1)]
    MalformedManifest(String, String),
    #[fail(display = "Could not resolve shortcut of {}.", _0)]
    UnresolvedShortcut(String),
    #[fail(display = "{}", _0)]
    MalformedShortcut(String),
    #[fail(display = "{} has been registered already.", _0)]
    DuplicateRegistration(String),
    #[fail(display = "Failed to decode {}: {}.", _0, _1)]
    Decode(String, String),
    #[fail(display = "{}", _0)]
    Config(#[cause] ::serde_json::Error),
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl From<::std::io::Error> for Error {
    fn from(err: ::std::io::Error) -> Self {
        Error::IO(err)
    }
}

impl From<::serde_json::Error> for Error {
    fn from(err: ::serde_json::Error) -> Self {
        Error::Config(err)
    }
}
