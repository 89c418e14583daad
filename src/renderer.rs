mod mesh;
mod shader;
mod vertex;

use mesh::TriangleMesh;
use shader::ShaderProgram;
use vertex::TRIANGLE;

pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.3, 0.3, 1.0];

/// The program's entire GPU state: one shader program, one vertex array,
/// one vertex buffer. Nothing is mutated after construction.
pub struct Renderer {
    program: ShaderProgram,
    mesh: TriangleMesh,
}

impl Renderer {
    pub fn new() -> Renderer {
        let program = ShaderProgram::build(shader::VERTEX_SHADER_SRC, shader::FRAGMENT_SHADER_SRC);
        if program.link_status() {
            log::info!("shader program linked");
        }

        let mesh = TriangleMesh::upload(&TRIANGLE);
        log::info!("uploaded {} vertices as static geometry", mesh.vertex_count());

        Renderer { program, mesh }
    }

    /// Clears the color buffer and issues the one triangle draw.
    pub fn draw_frame(&self) {
        unsafe {
            gl::ClearColor(CLEAR_COLOR[0], CLEAR_COLOR[1], CLEAR_COLOR[2], CLEAR_COLOR[3]);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        self.program.bind();
        self.mesh.bind();
        unsafe { gl::DrawArrays(gl::TRIANGLES, 0, self.mesh.vertex_count()) }
    }

    pub fn set_viewport(&self, width: i32, height: i32) {
        unsafe { gl::Viewport(0, 0, width, height) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_color_is_the_fixed_teal() {
        assert_eq!(CLEAR_COLOR, [0.2, 0.3, 0.3, 1.0]);
    }
}
