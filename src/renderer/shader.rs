use std::ffi::CString;
use std::ptr;

use gl::types::{GLchar, GLenum, GLint, GLsizei, GLuint};

pub const VERTEX_SHADER_SRC: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;
void main() {
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
"#;

pub const FRAGMENT_SHADER_SRC: &str = r#"#version 330 core
out vec4 FragColor;
void main() {
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
"#;

// Driver diagnostics are reported truncated to this many bytes.
const INFO_LOG_CAP: GLsizei = 512;

/// A linked program object. Building never fails the process: compile and
/// link diagnostics are logged and the (possibly unusable) program is kept,
/// in which case draws are driver-defined no-ops.
pub struct ShaderProgram {
    id: GLuint,
}

impl ShaderProgram {
    pub fn build(vertex_src: &str, fragment_src: &str) -> ShaderProgram {
        unsafe {
            let vertex = compile(gl::VERTEX_SHADER, vertex_src);
            let fragment = compile(gl::FRAGMENT_SHADER, fragment_src);

            let id = gl::CreateProgram();
            gl::AttachShader(id, vertex);
            gl::AttachShader(id, fragment);
            gl::LinkProgram(id);

            let mut status = GLint::from(gl::FALSE);
            gl::GetProgramiv(id, gl::LINK_STATUS, &mut status);
            if status != GLint::from(gl::TRUE) {
                log::error!("shader program link failed:\n{}", program_info_log(id));
            }

            // The stage objects are no longer needed once the link was
            // attempted, whether or not it succeeded.
            gl::DeleteShader(vertex);
            gl::DeleteShader(fragment);

            ShaderProgram { id }
        }
    }

    pub fn bind(&self) {
        unsafe { gl::UseProgram(self.id) }
    }

    pub fn link_status(&self) -> bool {
        let mut status = GLint::from(gl::FALSE);
        unsafe { gl::GetProgramiv(self.id, gl::LINK_STATUS, &mut status) };
        status == GLint::from(gl::TRUE)
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}

unsafe fn compile(stage: GLenum, source: &str) -> GLuint {
    let shader = gl::CreateShader(stage);
    let c_source = CString::new(source).expect("shader source contains a NUL byte");
    gl::ShaderSource(shader, 1, &c_source.as_ptr(), ptr::null());
    gl::CompileShader(shader);

    let mut status = GLint::from(gl::FALSE);
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);
    if status != GLint::from(gl::TRUE) {
        log::error!(
            "{} shader compilation failed:\n{}",
            stage_name(stage),
            shader_info_log(shader)
        );
    }

    shader
}

fn stage_name(stage: GLenum) -> &'static str {
    match stage {
        gl::VERTEX_SHADER => "vertex",
        gl::FRAGMENT_SHADER => "fragment",
        _ => "unknown",
    }
}

unsafe fn shader_info_log(shader: GLuint) -> String {
    let mut buf = vec![0u8; INFO_LOG_CAP as usize];
    let mut len: GLsizei = 0;
    gl::GetShaderInfoLog(shader, INFO_LOG_CAP, &mut len, buf.as_mut_ptr() as *mut GLchar);
    trim_log(buf, len)
}

unsafe fn program_info_log(program: GLuint) -> String {
    let mut buf = vec![0u8; INFO_LOG_CAP as usize];
    let mut len: GLsizei = 0;
    gl::GetProgramInfoLog(program, INFO_LOG_CAP, &mut len, buf.as_mut_ptr() as *mut GLchar);
    trim_log(buf, len)
}

fn trim_log(mut buf: Vec<u8>, len: GLsizei) -> String {
    buf.truncate(len.max(0) as usize);
    String::from_utf8_lossy(&buf).trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_are_glsl_330_core() {
        assert!(VERTEX_SHADER_SRC.starts_with("#version 330 core"));
        assert!(FRAGMENT_SHADER_SRC.starts_with("#version 330 core"));
    }

    #[test]
    fn vertex_source_reads_position_from_slot_zero() {
        assert!(VERTEX_SHADER_SRC.contains("layout (location = 0) in vec3 aPos;"));
    }

    #[test]
    fn fragment_source_writes_opaque_orange() {
        assert!(FRAGMENT_SHADER_SRC.contains("out vec4 FragColor;"));
        assert!(FRAGMENT_SHADER_SRC.contains("vec4(1.0, 0.5, 0.2, 1.0)"));
    }

    #[test]
    fn sources_survive_c_string_conversion() {
        assert!(CString::new(VERTEX_SHADER_SRC).is_ok());
        assert!(CString::new(FRAGMENT_SHADER_SRC).is_ok());
    }

    #[test]
    fn stage_names_cover_both_stages() {
        assert_eq!(stage_name(gl::VERTEX_SHADER), "vertex");
        assert_eq!(stage_name(gl::FRAGMENT_SHADER), "fragment");
        assert_eq!(stage_name(gl::GEOMETRY_SHADER), "unknown");
    }

    #[test]
    fn trim_log_respects_driver_reported_length() {
        let buf = b"0:1(10): error: syntax error\n\0\0\0".to_vec();
        assert_eq!(trim_log(buf, 29), "0:1(10): error: syntax error");
    }

    #[test]
    fn trim_log_handles_empty_log() {
        assert_eq!(trim_log(vec![0u8; 16], 0), "");
    }
}
