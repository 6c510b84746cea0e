use bitflags::bitflags;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Format {
    // R8
    R8Unorm,
    R8Snorm,
    R8UInt,
    R8SInt,
    R8Srgb,

    // R16
    R16Unorm,
    R16Snorm,
    R16UInt,
    R16SInt,
    R16SFloat,

    // R32
    R32UInt,
    R32SInt,
    R32SFloat,

    // RG8
    Rg8Unorm,
    Rg8Snorm,
    Rg8UInt,
    Rg8SInt,
    Rg8Srgb,

    // RG16
    Rg16Unorm,
    Rg16Snorm,
    Rg16UInt,
    Rg16SInt,
    Rg16SFloat,

    // RG32
    Rg32UInt,
    Rg32SInt,
    Rg32SFloat,

    // RGBA8
    Rgba8Unorm,
    Rgba8Snorm,
    Rgba8UInt,
    Rgba8SInt,
    Rgba8Srgb,

    // RGBA16
    Rgba16Unorm,
    Rgba16Snorm,
    Rgba16UInt,
    Rgba16SInt,
    Rgba16SFloat,

    // RGBA32
    Rgba32UInt,
    Rgba32SInt,
    Rgba32SFloat,

    // BGRA8
    Bgra8Unorm,
    Bgra8Srgb,

    // Compressed
    BC1Srgb,
    BC1Unorm,
    BC2Srgb,
    BC2Unorm,
    BC3Srgb,
    BC3Unorm,
    BC6HUFloat,
    BC7Srgb,
    BC7Unorm,

    // Depth
    D16Unorm,
    D24UnormS8Uint,
    D32Sfloat,
    D32SfloatS8Uint,
}

/// The faces of a cube map, in the order backends lay them out in memory.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CubeFace {
    North,
    East,
    South,
    West,
    Top,
    Bottom,
}

/// A rectangular window into a single face and mip level of a cube map.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Region {
    /// Horizontal offset in texels of the left edge of the region.
    pub x: u32,
    /// Vertical offset in texels of the top edge of the region.
    pub y: u32,
    /// The width in texels of the region.
    pub width: u32,
    /// The height in texels of the region.
    pub height: u32,
}

bitflags! {
    #[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    #[serde(transparent)]
    pub struct TextureUsage: u32 {
        const TRANSFER_SRC             = 0b0000001;
        const TRANSFER_DST             = 0b0000010;
        const SAMPLED                  = 0b0000100;
        const STORAGE                  = 0b0001000;
        const COLOR_ATTACHMENT         = 0b0010000;
        const DEPTH_STENCIL_ATTACHMENT = 0b0100000;
    }
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemoryUsage {
    Unknown,
    GpuOnly,
    CpuToGpu,
    GpuToCpu,
}

impl Format {
    /// The size in bytes of a single texel, or of a single 4x4 block for compressed formats.
    #[inline(always)]
    pub fn texel_size(&self) -> u64 {
        match *self {
            // 1 byte
            Format::R8Unorm
            | Format::R8Snorm
            | Format::R8UInt
            | Format::R8SInt
            | Format::R8Srgb => 1,

            // 2 bytes
            Format::R16Unorm
            | Format::R16Snorm
            | Format::R16UInt
            | Format::R16SInt
            | Format::R16SFloat
            | Format::Rg8Unorm
            | Format::Rg8Snorm
            | Format::Rg8UInt
            | Format::Rg8SInt
            | Format::Rg8Srgb
            | Format::D16Unorm => 2,

            // 4 bytes
            Format::R32UInt
            | Format::R32SInt
            | Format::R32SFloat
            | Format::Rg16Unorm
            | Format::Rg16Snorm
            | Format::Rg16UInt
            | Format::Rg16SInt
            | Format::Rg16SFloat
            | Format::Rgba8Unorm
            | Format::Rgba8Snorm
            | Format::Rgba8UInt
            | Format::Rgba8SInt
            | Format::Rgba8Srgb
            | Format::Bgra8Unorm
            | Format::Bgra8Srgb
            | Format::D24UnormS8Uint
            | Format::D32Sfloat => 4,

            // 8 bytes
            Format::Rg32UInt
            | Format::Rg32SInt
            | Format::Rg32SFloat
            | Format::Rgba16Unorm
            | Format::Rgba16Snorm
            | Format::Rgba16UInt
            | Format::Rgba16SInt
            | Format::Rgba16SFloat
            | Format::D32SfloatS8Uint => 8,

            // 16 bytes
            Format::Rgba32UInt | Format::Rgba32SInt | Format::Rgba32SFloat => 16,

            // 8 bytes per 4x4 block
            Format::BC1Srgb | Format::BC1Unorm => 8,

            // 16 bytes per 4x4 block
            Format::BC2Srgb
            | Format::BC2Unorm
            | Format::BC3Srgb
            | Format::BC3Unorm
            | Format::BC6HUFloat
            | Format::BC7Srgb
            | Format::BC7Unorm => 16,
        }
    }

    /// The size in bytes of a `width` by `height` texel region in this format, or `None` when
    /// that size does not fit in a `u64`. Compressed formats are charged per block, with the
    /// dimensions rounded up to whole 4x4 blocks.
    #[inline(always)]
    pub fn byte_size(&self, width: u32, height: u32) -> Option<u64> {
        if self.is_compressed() {
            let rounded_width = (width as u64 + 3) & !3;
            let rounded_height = (height as u64 + 3) & !3;
            (rounded_width / 4)
                .checked_mul(rounded_height / 4)?
                .checked_mul(self.texel_size())
        } else {
            (width as u64)
                .checked_mul(height as u64)?
                .checked_mul(self.texel_size())
        }
    }

    #[inline(always)]
    pub fn is_compressed(&self) -> bool {
        matches!(
            *self,
            Format::BC1Srgb
                | Format::BC1Unorm
                | Format::BC2Srgb
                | Format::BC2Unorm
                | Format::BC3Srgb
                | Format::BC3Unorm
                | Format::BC6HUFloat
                | Format::BC7Srgb
                | Format::BC7Unorm
        )
    }

    #[inline(always)]
    pub fn is_color(&self) -> bool {
        !(self.is_depth() || self.is_stencil())
    }

    #[inline(always)]
    pub fn is_depth(&self) -> bool {
        matches!(
            *self,
            Format::D16Unorm | Format::D24UnormS8Uint | Format::D32Sfloat | Format::D32SfloatS8Uint
        )
    }

    #[inline(always)]
    pub fn is_stencil(&self) -> bool {
        matches!(*self, Format::D24UnormS8Uint | Format::D32SfloatS8Uint)
    }
}

impl Region {
    /// Checks that `other` is a non-empty region lying entirely within `self`.
    #[inline(always)]
    pub fn contains(&self, other: &Region) -> bool {
        other.width > 0
            && other.height > 0
            && other.x >= self.x
            && other.y >= self.y
            && other.x as u64 + other.width as u64 <= self.x as u64 + self.width as u64
            && other.y as u64 + other.height as u64 <= self.y as u64 + self.height as u64
    }
}
