use crate::{context::Context, types::*, Backend};

use std::{mem, ptr::NonNull};

use bytemuck::Pod;
use log::{debug, warn};
use thiserror::*;

pub struct CubeMapCreateInfo {
    pub format: Format,
    pub size: u32,
    pub mip_map: bool,
    pub texture_usage: TextureUsage,
    pub memory_usage: MemoryUsage,
    pub debug_name: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CubeMapCreateError {
    #[error("cube map size must be at least one texel")]
    ZeroSize,
    #[error("an error has occured: {0}")]
    Other(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CubeMapDataError {
    #[error("mip level {level} is out of bounds for a cube map with {mip_count} mip levels")]
    InvalidMipLevel { level: usize, mip_count: usize },
    #[error("region {region:?} is not contained within the mip level bounds {bounds:?}")]
    RegionOutOfBounds { region: Region, bounds: Region },
    #[error("element size {elem_size} is incompatible with a texel size of {texel_size}")]
    IncompatibleElementSize { elem_size: u64, texel_size: u64 },
    #[error("start index {start} is out of bounds for a buffer of length {len}")]
    InvalidStartIndex { start: usize, len: usize },
    #[error("buffer of length {len} holds fewer than {count} elements after index {start}")]
    BufferTooSmall { len: usize, start: usize, count: usize },
    #[error("region {region:?} is too large for its byte size to be computed")]
    RegionTooLarge { region: Region },
    #[error("{provided} bytes of data were provided, but the region requires exactly {expected}")]
    SizeMismatch { provided: u64, expected: u64 },
    #[error("an error has occured: {0}")]
    Other(String),
}

pub struct CubeMap<B: Backend> {
    ctx: Context<B>,
    size: u32,
    format: Format,
    mip_count: usize,
    pub(crate) id: B::CubeMap,
}

impl<B: Backend> CubeMap<B> {
    /// Creates a new cube map.
    ///
    /// # Arguments
    ///
    /// - `ctx` - The [`Context`] to create the cube map with.
    /// - `create_info` - Describes the cube map to create. When `mip_map` is set, the number
    /// of mip levels is the length of the halving chain from `size` down to a single texel.
    pub fn new(
        ctx: Context<B>,
        create_info: CubeMapCreateInfo,
    ) -> Result<Self, CubeMapCreateError> {
        if create_info.size == 0 {
            return Err(CubeMapCreateError::ZeroSize);
        }
        let size = create_info.size;
        let format = create_info.format;
        let mip_count = if create_info.mip_map {
            if !size.is_power_of_two() {
                warn!(
                    "cube map size {} is not a power of two. Mip dimensions will round down \
                    when halving.",
                    size
                );
            }
            size.ilog2() as usize + 1
        } else {
            1
        };
        debug!(
            "creating cube map (size = {}, mip levels = {}, name = {:?})",
            size, mip_count, create_info.debug_name
        );
        let id = unsafe { ctx.0.create_cube_map(create_info)? };
        Ok(Self {
            ctx,
            size,
            format,
            mip_count,
            id,
        })
    }

    #[inline(always)]
    pub fn internal(&self) -> &B::CubeMap {
        &self.id
    }

    #[inline(always)]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline(always)]
    pub fn format(&self) -> Format {
        self.format
    }

    #[inline(always)]
    pub fn mip_count(&self) -> usize {
        self.mip_count
    }

    /// Reads back the entirety of mip level 0 of one face into `dst`. Equivalent to
    /// [`get_data_region`](CubeMap::get_data_region) with the whole of `dst` as the target.
    pub fn get_data<T: Pod>(&self, face: CubeFace, dst: &mut [T]) -> Result<(), CubeMapDataError> {
        let count = dst.len();
        self.get_data_region(face, 0, None, dst, 0, count)
    }

    /// Reads back the entirety of mip level 0 of one face into `count` elements of `dst`
    /// beginning at index `start`.
    pub fn get_data_range<T: Pod>(
        &self,
        face: CubeFace,
        dst: &mut [T],
        start: usize,
        count: usize,
    ) -> Result<(), CubeMapDataError> {
        self.get_data_region(face, 0, None, dst, start, count)
    }

    /// Reads back a region of one face of the cube map.
    ///
    /// # Arguments
    ///
    /// - `face` - The face to read from.
    /// - `mip_level` - The mip level to read from.
    /// - `region` - The texel region to read, or `None` for the whole mip level.
    /// - `dst` - The buffer to read into.
    /// - `start` - The index within `dst` of the first element to write.
    /// - `count` - The number of elements to write. `count` elements must hold exactly the
    /// byte size of the region in the cube map's format.
    ///
    /// The read blocks until the backend has finished copying.
    pub fn get_data_region<T: Pod>(
        &self,
        face: CubeFace,
        mip_level: usize,
        region: Option<Region>,
        dst: &mut [T],
        start: usize,
        count: usize,
    ) -> Result<(), CubeMapDataError> {
        let elem_size = mem::size_of::<T>() as u64;
        let checked = self.validate_params(mip_level, region, dst.len(), elem_size, start, count)?;
        let bytes = bytemuck::cast_slice_mut::<T, u8>(dst);
        let dst_ptr =
            unsafe { NonNull::new_unchecked(bytes.as_mut_ptr().add(start * mem::size_of::<T>())) };
        unsafe {
            self.ctx
                .0
                .get_cube_map_data(&self.id, face, mip_level, checked, dst_ptr)
        }
    }

    /// Uploads `src` to the entirety of mip level 0 of one face. Equivalent to
    /// [`set_data_region`](CubeMap::set_data_region) with the whole of `src` as the source.
    pub fn set_data<T: Pod>(&mut self, face: CubeFace, src: &[T]) -> Result<(), CubeMapDataError> {
        let count = src.len();
        self.set_data_region(face, 0, None, src, 0, count)
    }

    /// Uploads `count` elements of `src` beginning at index `start` to the entirety of mip
    /// level 0 of one face.
    pub fn set_data_range<T: Pod>(
        &mut self,
        face: CubeFace,
        src: &[T],
        start: usize,
        count: usize,
    ) -> Result<(), CubeMapDataError> {
        self.set_data_region(face, 0, None, src, start, count)
    }

    /// Uploads a region of one face of the cube map.
    ///
    /// # Arguments
    ///
    /// - `face` - The face to write to.
    /// - `mip_level` - The mip level to write to.
    /// - `region` - The texel region to write, or `None` for the whole mip level. When the
    /// format is compressed and no region is given, the level bounds are rounded up to whole
    /// 4x4 blocks before being handed to the backend, since the tail of a compressed mip
    /// chain still occupies full blocks.
    /// - `src` - The buffer to upload from. The borrow lasts for the whole native copy, so
    /// the memory cannot move or be freed while the backend reads it.
    /// - `start` - The index within `src` of the first element to upload.
    /// - `count` - The number of elements to upload. `count` elements must hold exactly the
    /// byte size of the region in the cube map's format.
    ///
    /// The upload blocks until the backend has finished copying.
    pub fn set_data_region<T: Pod>(
        &mut self,
        face: CubeFace,
        mip_level: usize,
        region: Option<Region>,
        src: &[T],
        start: usize,
        count: usize,
    ) -> Result<(), CubeMapDataError> {
        let elem_size = mem::size_of::<T>() as u64;
        let mut checked =
            self.validate_params(mip_level, region, src.len(), elem_size, start, count)?;
        if region.is_none() && self.format.is_compressed() {
            checked.width = (checked.width + 3) & !3;
            checked.height = (checked.height + 3) & !3;
        }
        let bytes = bytemuck::cast_slice::<T, u8>(src);
        let src_ptr = unsafe {
            NonNull::new_unchecked(bytes.as_ptr().add(start * mem::size_of::<T>()) as *mut u8)
        };
        unsafe {
            self.ctx
                .0
                .set_cube_map_data(&mut self.id, face, mip_level, checked, src_ptr)
        }
    }

    /// Checks a face access against the shape of the cube map and the element type of the
    /// client buffer. Returns the region actually addressed, which is the given region or
    /// the whole of the mip level.
    fn validate_params(
        &self,
        mip_level: usize,
        region: Option<Region>,
        buffer_len: usize,
        elem_size: u64,
        start: usize,
        count: usize,
    ) -> Result<Region, CubeMapDataError> {
        if mip_level >= self.mip_count {
            return Err(CubeMapDataError::InvalidMipLevel {
                level: mip_level,
                mip_count: self.mip_count,
            });
        }
        let extent = (self.size >> mip_level).max(1);
        let bounds = Region {
            x: 0,
            y: 0,
            width: extent,
            height: extent,
        };
        let checked = region.unwrap_or(bounds);
        if !bounds.contains(&checked) {
            return Err(CubeMapDataError::RegionOutOfBounds {
                region: checked,
                bounds,
            });
        }
        let texel_size = self.format.texel_size();
        if elem_size == 0 || elem_size > texel_size || texel_size % elem_size != 0 {
            return Err(CubeMapDataError::IncompatibleElementSize {
                elem_size,
                texel_size,
            });
        }
        if start >= buffer_len {
            return Err(CubeMapDataError::InvalidStartIndex {
                start,
                len: buffer_len,
            });
        }
        if buffer_len - start < count {
            return Err(CubeMapDataError::BufferTooSmall {
                len: buffer_len,
                start,
                count,
            });
        }
        let expected = self
            .format
            .byte_size(checked.width, checked.height)
            .ok_or(CubeMapDataError::RegionTooLarge { region: checked })?;
        let provided = count as u64 * elem_size;
        if provided != expected {
            return Err(CubeMapDataError::SizeMismatch { provided, expected });
        }
        Ok(checked)
    }
}

impl<B: Backend> Drop for CubeMap<B> {
    #[inline(always)]
    fn drop(&mut self) {
        unsafe {
            self.ctx.0.destroy_cube_map(&mut self.id);
        }
    }
}

impl Default for CubeMapCreateInfo {
    #[inline(always)]
    fn default() -> Self {
        Self {
            format: Format::Rgba8Unorm,
            size: 128,
            mip_map: false,
            texture_usage: TextureUsage::empty(),
            memory_usage: MemoryUsage::GpuOnly,
            debug_name: None,
        }
    }
}
