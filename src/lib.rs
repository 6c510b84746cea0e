#[cfg(feature = "empty")]
pub type Backend = empty::EmptyBackend;

#[cfg(feature = "empty")]
pub mod backend {
    pub use empty::EmptyBackend;
}

pub mod prelude {
    pub use api::types::*;

    // Context
    pub type Context = api::context::Context<crate::Backend>;

    // Cube map
    pub type CubeMap = api::cube_map::CubeMap<crate::Backend>;
    pub use api::cube_map::{CubeMapCreateError, CubeMapCreateInfo, CubeMapDataError};
}
