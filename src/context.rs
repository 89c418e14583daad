use std::error;
use std::ffi::CStr;
use std::fmt;

use gl::types::GLenum;
use glutin::dpi::{LogicalSize, PhysicalSize};
use glutin::event_loop::EventLoop;
use glutin::window::{Window, WindowBuilder};
use glutin::{
    Api, ContextBuilder, ContextError, CreationError, GlProfile, GlRequest, PossiblyCurrent,
    WindowedContext,
};

use crate::config::WindowConfig;

/// Fatal setup failures. Anything past setup either works or degrades
/// without becoming an error (see the shader module).
#[derive(Debug)]
pub enum InitError {
    Window(CreationError),
    MakeCurrent(ContextError),
    MissingSymbol(&'static str),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::Window(_) => write!(f, "failed to create the window and OpenGL context"),
            InitError::MakeCurrent(_) => write!(f, "failed to make the OpenGL context current"),
            InitError::MissingSymbol(name) => {
                write!(f, "OpenGL entry point {} failed to load", name)
            }
        }
    }
}

impl error::Error for InitError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            InitError::Window(err) => Some(err),
            InitError::MakeCurrent(err) => Some(err),
            InitError::MissingSymbol(_) => None,
        }
    }
}

/// The window plus its current OpenGL 3.3 core context.
pub struct GlContext {
    windowed: WindowedContext<PossiblyCurrent>,
}

impl GlContext {
    pub fn new(config: WindowConfig, event_loop: &EventLoop<()>) -> Result<GlContext, InitError> {
        let WindowConfig { width, height, title } = config;
        log::info!("creating {}x{} window \"{}\"", width, height, title);

        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(PhysicalSize::new(width, height))
            .with_min_inner_size(LogicalSize::new(64.0, 64.0));

        let context = ContextBuilder::new()
            .with_gl(GlRequest::Specific(Api::OpenGl, (3, 3)))
            .with_gl_profile(GlProfile::Core)
            .build_windowed(window, event_loop)
            .map_err(InitError::Window)?;

        // Symbol loading and every GL call after it require the context to
        // be current on this thread.
        let context =
            unsafe { context.make_current() }.map_err(|(_, err)| InitError::MakeCurrent(err))?;

        gl::load_with(|symbol| context.get_proc_address(symbol) as *const _);
        ensure_entry_points()?;

        unsafe {
            log::info!(
                "OpenGL {} on {}",
                gl_string(gl::VERSION),
                gl_string(gl::RENDERER)
            );
        }

        Ok(GlContext { windowed: context })
    }

    pub fn window(&self) -> &Window {
        self.windowed.window()
    }

    pub fn resize(&self, size: PhysicalSize<u32>) {
        self.windowed.resize(size);
    }

    pub fn swap_buffers(&self) -> Result<(), ContextError> {
        self.windowed.swap_buffers()
    }
}

fn ensure_entry_points() -> Result<(), InitError> {
    let entry_points = [
        ("glCreateShader", gl::CreateShader::is_loaded()),
        ("glShaderSource", gl::ShaderSource::is_loaded()),
        ("glCompileShader", gl::CompileShader::is_loaded()),
        ("glCreateProgram", gl::CreateProgram::is_loaded()),
        ("glLinkProgram", gl::LinkProgram::is_loaded()),
        ("glGenVertexArrays", gl::GenVertexArrays::is_loaded()),
        ("glGenBuffers", gl::GenBuffers::is_loaded()),
        ("glBufferData", gl::BufferData::is_loaded()),
        ("glClearColor", gl::ClearColor::is_loaded()),
        ("glClear", gl::Clear::is_loaded()),
        ("glUseProgram", gl::UseProgram::is_loaded()),
        ("glDrawArrays", gl::DrawArrays::is_loaded()),
        ("glViewport", gl::Viewport::is_loaded()),
    ];

    for &(name, loaded) in entry_points.iter() {
        if !loaded {
            return Err(InitError::MissingSymbol(name));
        }
    }

    Ok(())
}

unsafe fn gl_string(name: GLenum) -> String {
    let ptr = gl::GetString(name);
    if ptr.is_null() {
        return "unknown".to_owned();
    }
    CStr::from_ptr(ptr as *const _).to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn window_failure_chains_the_library_error() {
        let err = InitError::Window(CreationError::OsError("no display".to_owned()));
        assert_eq!(
            err.to_string(),
            "failed to create the window and OpenGL context"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn make_current_failure_chains_the_library_error() {
        let err = InitError::MakeCurrent(ContextError::ContextLost);
        assert_eq!(err.to_string(), "failed to make the OpenGL context current");
        assert!(err.source().is_some());
    }

    #[test]
    fn missing_symbol_names_the_entry_point() {
        let err = InitError::MissingSymbol("glDrawArrays");
        assert_eq!(err.to_string(), "OpenGL entry point glDrawArrays failed to load");
        assert!(err.source().is_none());
    }
}
