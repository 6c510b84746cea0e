//! Hexel is a cube map texture library inspired by the resource layers of
//! [Vulkan](https://www.vulkan.org/) and [wgpu](https://github.com/gfx-rs/wgpu). It validates
//! face and mip level accesses up front and leaves the actual GPU work to a [`Backend`].
//!
//! To start using Hexel, you must first choose a [`Backend`] and then create a
//! [`Context`](struct@context::Context).

pub mod context;
pub mod cube_map;
pub mod types;


use std::ptr::NonNull;

use cube_map::{CubeMapCreateError, CubeMapCreateInfo, CubeMapDataError};
use types::{CubeFace, Region};

/// TODO:
/// - Document the safety contract each hook places on its caller.
#[allow(clippy::missing_safety_doc)]
pub trait Backend: Sized + 'static {
    type CubeMap;

    unsafe fn create_cube_map(
        &self,
        create_info: CubeMapCreateInfo,
    ) -> Result<Self::CubeMap, CubeMapCreateError>;
    unsafe fn destroy_cube_map(&self, id: &mut Self::CubeMap);

    /// Copies the texels of `region` of one face and mip level into `dst`. The caller
    /// guarantees `dst` points at enough writable memory for the whole region in the cube
    /// map's format.
    unsafe fn get_cube_map_data(
        &self,
        id: &Self::CubeMap,
        face: CubeFace,
        mip_level: usize,
        region: Region,
        dst: NonNull<u8>,
    ) -> Result<(), CubeMapDataError>;

    /// Copies texels from `src` into `region` of one face and mip level. The caller
    /// guarantees `src` points at enough readable memory for the whole region in the cube
    /// map's format, and that the memory does not move for the duration of the call.
    unsafe fn set_cube_map_data(
        &self,
        id: &mut Self::CubeMap,
        face: CubeFace,
        mip_level: usize,
        region: Region,
        src: NonNull<u8>,
    ) -> Result<(), CubeMapDataError>;
}
