use std::mem;
use std::ptr;

use gl::types::{GLsizei, GLsizeiptr, GLuint};

use super::vertex::Vertex;

/// One vertex array + one buffer holding static geometry, uploaded once.
pub struct TriangleMesh {
    vao: GLuint,
    vbo: GLuint,
    vertex_count: GLsizei,
}

impl TriangleMesh {
    pub fn upload(vertices: &[Vertex]) -> TriangleMesh {
        assert!(!vertices.is_empty());

        let mut vao = 0;
        let mut vbo = 0;

        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            assert_ne!(vao, 0);
            assert_ne!(vbo, 0);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (vertices.len() * mem::size_of::<Vertex>()) as GLsizeiptr,
                vertices.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );

            // Attribute 0: three floats per vertex, tightly packed.
            gl::VertexAttribPointer(
                0,
                3,
                gl::FLOAT,
                gl::FALSE,
                mem::size_of::<Vertex>() as GLsizei,
                ptr::null(),
            );
            gl::EnableVertexAttribArray(0);

            // Leave nothing bound; the render loop binds what it draws.
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            gl::BindVertexArray(0);
        }

        TriangleMesh {
            vao,
            vbo,
            vertex_count: vertices.len() as GLsizei,
        }
    }

    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.vao) }
    }

    pub fn vertex_count(&self) -> GLsizei {
        self.vertex_count
    }
}

impl Drop for TriangleMesh {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
        }
    }
}
