use std::rc::Rc;

use crate::error::SetupError;
use crate::graphics::GraphicsContext;
use crate::host::{Canvas, HostElement};

/// Contract between a shader-art host and its plugins.
///
/// The host constructs plugins, calls `setup` once its element, graphics
/// context and program exist, and `dispose` on teardown.
pub trait Plugin<G: GraphicsContext> {
    fn name(&self) -> &'static str;

    fn setup(
        &mut self,
        host: Option<Rc<dyn HostElement>>,
        gl: Rc<G>,
        program: Rc<G::Program>,
        canvas: Rc<dyn Canvas>,
    ) -> Result<(), SetupError>;

    fn dispose(&mut self);
}
