use bytemuck::{Pod, Zeroable};

/// CPU mirror of the `Uniforms` struct declared in `shaders/fullscreen.wgsl`.
///
/// Field order and types must match the WGSL declaration; offsets are listed in
/// [`FIELDS`].
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct UniformBlock {
    /// Drawable size in physical pixels.
    pub resolution: [f32; 2],
    /// Normalized pointer position, top-left origin.
    pub pointer: [f32; 2],
    /// Normalized position where the current/last drag started.
    pub pointer_start: [f32; 2],
    /// Seconds since start.
    pub time: f32,
    /// 1 while dragging.
    pub dragging: i32,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum UniformKind {
    Float,
    Vec2,
    Int,
}

impl UniformKind {
    pub fn size(self) -> u64 {
        match self {
            UniformKind::Float | UniformKind::Int => 4,
            UniformKind::Vec2 => 8,
        }
    }
}

/// Shader-visible name, byte offset, kind.
pub(crate) const FIELDS: [(&str, u64, UniformKind); 5] = [
    ("resolution", std::mem::offset_of!(UniformBlock, resolution) as u64, UniformKind::Vec2),
    ("pointer", std::mem::offset_of!(UniformBlock, pointer) as u64, UniformKind::Vec2),
    ("pointerStart", std::mem::offset_of!(UniformBlock, pointer_start) as u64, UniformKind::Vec2),
    ("time", std::mem::offset_of!(UniformBlock, time) as u64, UniformKind::Float),
    ("dragging", std::mem::offset_of!(UniformBlock, dragging) as u64, UniformKind::Int),
];

pub(crate) fn lookup(name: &str) -> Option<(&'static str, u64, UniformKind)> {
    FIELDS.iter().copied().find(|(n, _, _)| *n == name)
}

/// Resolved uniform: a slice of a program's uniform buffer.
#[derive(Debug, Clone)]
pub struct UniformLocation {
    pub(crate) buffer: wgpu::Buffer,
    pub(crate) name: &'static str,
    pub(crate) offset: u64,
    pub(crate) kind: UniformKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_matches_wgsl_layout() {
        // vec2<f32> aligns to 8; the struct has no implicit padding.
        assert_eq!(std::mem::size_of::<UniformBlock>(), 32);
        assert_eq!(lookup("resolution").map(|f| f.1), Some(0));
        assert_eq!(lookup("pointer").map(|f| f.1), Some(8));
        assert_eq!(lookup("pointerStart").map(|f| f.1), Some(16));
        assert_eq!(lookup("time").map(|f| f.1), Some(24));
        assert_eq!(lookup("dragging").map(|f| f.1), Some(28));
    }

    #[test]
    fn fields_fit_in_block() {
        for (name, offset, kind) in FIELDS {
            assert!(
                offset + kind.size() <= std::mem::size_of::<UniformBlock>() as u64,
                "{name} overflows the block"
            );
            assert_eq!(offset % 4, 0, "{name} is not 4-byte aligned");
        }
    }

    #[test]
    fn unknown_name_has_no_field() {
        assert!(lookup("mouse").is_none());
        assert!(lookup("pointer_start").is_none());
    }
}
