//! Shader binding constants shared between Rust code and the WGSL source in
//! `pipeline::frame`. Keep both sides in sync.

/// Group 0: frame texture resources
pub const FRAME_GROUP: u32 = 0;
/// Binding 0 in group 0: frame texture
pub const FRAME_TEXTURE_BINDING: u32 = 0;
/// Binding 1 in group 0: frame sampler
pub const FRAME_SAMPLER_BINDING: u32 = 1;
