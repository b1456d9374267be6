pub use crate::assets;
pub use crate::assets::prelude::*;

pub use crate::errors::{Error, Result};

pub use crate::res;
pub use crate::res::prelude::*;
