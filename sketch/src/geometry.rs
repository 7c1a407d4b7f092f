// Static vertex data for the demos.

/// Unit cube centred on the origin, four vertices per face so each face can
/// carry its own colour and normal. Faces: front, back, top, bottom, right,
/// left.
#[rustfmt::skip]
pub const CUBE_POSITIONS: [f32; 72] = [
    -0.5, -0.5,  0.5,   0.5, -0.5,  0.5,   0.5,  0.5,  0.5,  -0.5,  0.5,  0.5,
    -0.5, -0.5, -0.5,  -0.5,  0.5, -0.5,   0.5,  0.5, -0.5,   0.5, -0.5, -0.5,
    -0.5,  0.5, -0.5,  -0.5,  0.5,  0.5,   0.5,  0.5,  0.5,   0.5,  0.5, -0.5,
    -0.5, -0.5, -0.5,   0.5, -0.5, -0.5,   0.5, -0.5,  0.5,  -0.5, -0.5,  0.5,
     0.5, -0.5, -0.5,   0.5,  0.5, -0.5,   0.5,  0.5,  0.5,   0.5, -0.5,  0.5,
    -0.5, -0.5, -0.5,  -0.5, -0.5,  0.5,  -0.5,  0.5,  0.5,  -0.5,  0.5, -0.5,
];

const fn face_colours() -> [f32; 96] {
    const FACES: [[f32; 4]; 6] = [
        [1.0, 0.0, 0.0, 1.0], // red
        [0.0, 1.0, 0.0, 1.0], // green
        [0.0, 0.0, 1.0, 1.0], // blue
        [1.0, 1.0, 0.0, 1.0], // yellow
        [1.0, 0.0, 1.0, 1.0], // magenta
        [0.0, 1.0, 1.0, 1.0], // cyan
    ];

    let mut out = [0.0; 96];
    let mut i = 0;
    while i < 96 {
        out[i] = FACES[i / 16][i % 4];
        i += 1;
    }
    out
}

/// RGBA per vertex, one flat colour per face.
pub const CUBE_COLOURS: [f32; 96] = face_colours();

#[rustfmt::skip]
pub const CUBE_NORMALS: [f32; 72] = [
     0.0,  0.0,  1.0,   0.0,  0.0,  1.0,   0.0,  0.0,  1.0,   0.0,  0.0,  1.0,
     0.0,  0.0, -1.0,   0.0,  0.0, -1.0,   0.0,  0.0, -1.0,   0.0,  0.0, -1.0,
     0.0,  1.0,  0.0,   0.0,  1.0,  0.0,   0.0,  1.0,  0.0,   0.0,  1.0,  0.0,
     0.0, -1.0,  0.0,   0.0, -1.0,  0.0,   0.0, -1.0,  0.0,   0.0, -1.0,  0.0,
     1.0,  0.0,  0.0,   1.0,  0.0,  0.0,   1.0,  0.0,  0.0,   1.0,  0.0,  0.0,
    -1.0,  0.0,  0.0,  -1.0,  0.0,  0.0,  -1.0,  0.0,  0.0,  -1.0,  0.0,  0.0,
];

#[rustfmt::skip]
pub const CUBE_INDICES: [u16; 36] = [
    0, 1, 2,     0, 2, 3,
    4, 5, 6,     4, 6, 7,
    8, 9, 10,    8, 10, 11,
    12, 13, 14,  12, 14, 15,
    16, 17, 18,  16, 18, 19,
    20, 21, 22,  20, 22, 23,
];

/// Outlines of "БІІ", drawn as triangle fans. They start above the top of
/// the canvas and are moved into view by the fall transform.
#[rustfmt::skip]
pub const LETTERS: [f32; 36] = [
    // Б
    -0.4, 1.4,   -0.05, 1.4,   -0.1, 1.3,   -0.3, 1.3,
    -0.3, 1.1,   -0.2, 0.9,    -0.3, 1.0,   -0.05, 1.0,
    -0.1, 0.8,   -0.4, 0.8,
    // І
     0.0, 1.4,    0.1, 1.4,     0.1, 0.8,    0.0, 0.8,
    // І
     0.2, 1.4,    0.3, 1.4,     0.3, 0.8,    0.2, 0.8,
];

/// `(first, count)` of each letter's fan within `LETTERS`.
pub const LETTER_FANS: [(i32, i32); 3] = [(0, 10), (10, 4), (14, 4)];

/// "Б" as seven triangles sharing its top left corner.
#[rustfmt::skip]
pub const EMBLEM_POSITIONS: [f32; 42] = [
    -0.4, 1.4,  -0.05, 1.4,  -0.1, 1.3,
    -0.4, 1.4,  -0.1, 1.3,   -0.3, 1.3,
    -0.4, 1.4,  -0.3, 1.3,   -0.3, 1.1,
    -0.4, 1.4,  -0.3, 1.1,   -0.4, 1.1,
    -0.4, 1.1,  -0.3, 1.1,   -0.05, 1.0,
    -0.4, 1.1,  -0.05, 1.0,  -0.1, 0.8,
    -0.4, 1.1,  -0.1, 0.8,   -0.4, 0.8,
];

/// RGB per vertex. There is one more colour than there are vertices; the
/// last is never read.
#[rustfmt::skip]
pub const EMBLEM_COLOURS: [f32; 66] = [
    1.0, 1.0, 0.5,  1.0, 0.5, 1.0,
    0.5, 1.0, 0.5,  1.0, 0.3, 0.4,
    0.4, 1.0, 0.2,  1.0, 0.0, 1.0,
    0.5, 0.5, 0.5,  1.0, 0.5, 0.0,
    0.0, 0.5, 0.5,  0.5, 0.0, 0.5,
    1.0, 0.0, 0.5,  0.5, 0.0, 0.5,
    0.5, 0.5, 0.5,  1.0, 0.5, 0.0,
    0.5, 0.5, 0.5,  1.0, 0.5, 0.0,
    0.0, 0.5, 0.5,  0.5, 0.0, 0.5,
    1.0, 1.0, 0.5,  1.0, 0.5, 1.0,
    0.5, 1.0, 0.5,  1.0, 0.3, 0.4,
];

const fn emblem_texcoords() -> [f32; 42] {
    const TRIANGLE: [f32; 6] = [1.0, 0.0, 0.5, 0.5, 0.3, 0.1];

    let mut out = [0.0; 42];
    let mut i = 0;
    while i < 42 {
        out[i] = TRIANGLE[i % 6];
        i += 1;
    }
    out
}

/// Every triangle samples the same patch of the texture.
pub const EMBLEM_TEXCOORDS: [f32; 42] = emblem_texcoords();

pub const EMBLEM_VERTEX_COUNT: i32 = 21;

/// Quad with interleaved `x, y, u, v` vertices.
#[rustfmt::skip]
pub const QUAD: [f32; 16] = [
    -0.5,  0.5,   0.0, 1.0,
    -0.5, -0.5,   0.0, 0.0,
     0.5,  0.5,   1.0, 1.0,
     0.5, -0.5,   1.0, 0.0,
];

/// Bytes between consecutive vertices in `QUAD`.
pub const QUAD_STRIDE: i32 = 16;

/// Byte offset of the texture coordinates within each `QUAD` vertex.
pub const QUAD_TEXCOORD_OFFSET: i32 = 8;

pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 1, 3];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cube_attributes_agree() {
        let vertices = CUBE_POSITIONS.len() / 3;
        assert_eq!(vertices, 24);
        assert_eq!(CUBE_NORMALS.len() / 3, vertices);
        assert_eq!(CUBE_COLOURS.len() / 4, vertices);
        assert!(CUBE_INDICES.iter().all(|&i| (i as usize) < vertices));
    }

    #[test]
    fn test_cube_face_colours() {
        // Second face (back) is green on all four vertices.
        for v in 4..8 {
            assert_eq!(&CUBE_COLOURS[v * 4..v * 4 + 4], &[0.0, 1.0, 0.0, 1.0]);
        }
        assert_eq!(&CUBE_COLOURS[92..96], &[0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_cube_normals_face_outwards() {
        for v in 0..24 {
            let p = &CUBE_POSITIONS[v * 3..v * 3 + 3];
            let n = &CUBE_NORMALS[v * 3..v * 3 + 3];
            let dot: f32 = p.iter().zip(n).map(|(a, b)| a * b).sum();
            assert!(dot > 0.0, "normal {v} points inwards");
        }
    }

    #[test]
    fn test_letter_fans_cover_letters() {
        let (first, count) = LETTER_FANS[LETTER_FANS.len() - 1];
        assert_eq!(((first + count) * 2) as usize, LETTERS.len());
        for pair in LETTER_FANS.windows(2) {
            assert_eq!(pair[0].0 + pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn test_emblem_attributes_cover_vertices() {
        let n = EMBLEM_VERTEX_COUNT as usize;
        assert_eq!(EMBLEM_POSITIONS.len(), n * 2);
        assert_eq!(EMBLEM_TEXCOORDS.len(), n * 2);
        assert!(EMBLEM_COLOURS.len() >= n * 3);
        assert_eq!(&EMBLEM_TEXCOORDS[6..12], &[1.0, 0.0, 0.5, 0.5, 0.3, 0.1]);
    }

    #[test]
    fn test_quad_indices() {
        let vertices = QUAD.len() as i32 * 4 / QUAD_STRIDE;
        assert_eq!(vertices, 4);
        assert!(QUAD_INDICES.iter().all(|&i| (i as i32) < vertices));
    }
}
