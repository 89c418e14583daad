// The bytes of `TRIANGLE` are handed straight to glBufferData, so the
// layout must stay a tightly packed [f32; 3] per vertex.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 3],
}

pub const TRIANGLE: [Vertex; 3] = [
    Vertex {
        position: [-0.5, -0.5, 0.0], // left
    },
    Vertex {
        position: [0.5, -0.5, 0.0], // right
    },
    Vertex {
        position: [0.0, 0.5, 0.0], // top
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn triangle_is_the_fixed_nine_floats() {
        let flat: Vec<f32> = TRIANGLE
            .iter()
            .flat_map(|v| v.position.iter().copied())
            .collect();
        assert_eq!(flat, [-0.5, -0.5, 0.0, 0.5, -0.5, 0.0, 0.0, 0.5, 0.0]);
    }

    #[test]
    fn vertices_are_tightly_packed() {
        assert_eq!(mem::size_of::<Vertex>(), 3 * mem::size_of::<f32>());
        assert_eq!(mem::size_of_val(&TRIANGLE), 9 * mem::size_of::<f32>());
    }

    #[test]
    fn triangle_is_flat_in_z() {
        assert!(TRIANGLE.iter().all(|v| v.position[2] == 0.0));
    }
}
