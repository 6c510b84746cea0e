use api::Backend;

/// A backend that accepts every call and performs no work. Useful for headless runs and as a
/// placeholder while porting to a new platform.
pub struct EmptyBackend;

impl Backend for EmptyBackend {
    type CubeMap = ();

    unsafe fn create_cube_map(
        &self,
        _create_info: api::cube_map::CubeMapCreateInfo,
    ) -> Result<Self::CubeMap, api::cube_map::CubeMapCreateError> {
        Ok(())
    }

    unsafe fn destroy_cube_map(&self, _id: &mut Self::CubeMap) {}

    unsafe fn get_cube_map_data(
        &self,
        _id: &Self::CubeMap,
        _face: api::types::CubeFace,
        _mip_level: usize,
        _region: api::types::Region,
        _dst: std::ptr::NonNull<u8>,
    ) -> Result<(), api::cube_map::CubeMapDataError> {
        Ok(())
    }

    unsafe fn set_cube_map_data(
        &self,
        _id: &mut Self::CubeMap,
        _face: api::types::CubeFace,
        _mip_level: usize,
        _region: api::types::Region,
        _src: std::ptr::NonNull<u8>,
    ) -> Result<(), api::cube_map::CubeMapDataError> {
        Ok(())
    }
}
