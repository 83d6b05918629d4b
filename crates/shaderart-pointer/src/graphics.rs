/// Low-level graphics API used to push uniform values into a shader program.
///
/// Mirrors the uniform subset of a GL-style context: resolve a location by name,
/// then write a value at that location. Writes to a `None` location are ignored,
/// which lets callers push uniforms the shader does not declare.
pub trait GraphicsContext {
    /// Compiled shader program that owns the uniforms.
    type Program;

    /// Resolved uniform handle.
    type Location;

    fn uniform_location(&self, program: &Self::Program, name: &str) -> Option<Self::Location>;

    fn uniform2fv(&self, location: Option<&Self::Location>, value: [f32; 2]);

    fn uniform1f(&self, location: Option<&Self::Location>, value: f32);

    fn uniform1i(&self, location: Option<&Self::Location>, value: i32);
}
