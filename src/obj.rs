
use crate::{geo::Triangle, trisubdiv::TriSubdiv, TriSubdivError};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path,
};
use vector_traits::GenericVector2;

/// A minimal Wavefront object holding a triangle soup in the plane z = 0.
///
/// Every triangle gets its own three vertices, so the face order in the file is the draw order
/// of the triangulation even for overlapping nearest neighbor triangles.
#[derive(Debug)]
pub struct Obj<T: GenericVector2> {
    pub name: String,
    pub vertices: Vec<T>,
    // the indices will be "real" indices, starting at zero.
    // 1 will be added to their value when the obj file is saved.
    // each triangle will be 3 indices
    pub indices: Vec<usize>,
}

impl<T: GenericVector2> Obj<T> {
    pub fn new(object_name: &str) -> Self {
        Self {
            name: object_name.to_string(),
            vertices: vec![],
            indices: vec![],
        }
    }

    /// Copies the live triangles of `tri`, in draw order
    pub fn from_triangulation(object_name: &str, tri: &TriSubdiv<T>) -> Self {
        let mut obj = Self::new(object_name);
        obj.vertices.reserve(tri.len() * 3);
        obj.indices.reserve(tri.len() * 3);
        for triangle in tri.triangles() {
            obj.add_triangle(triangle);
        }
        obj
    }

    pub fn add_triangle(&mut self, triangle: &Triangle<T>) {
        let index = self.vertices.len();
        self.vertices.extend_from_slice(&triangle.vertices());
        self.indices.extend_from_slice(&[index, index + 1, index + 2]);
    }

    pub fn write_obj(&self, filename: impl AsRef<path::Path>) -> Result<(), TriSubdivError> {
        let mut file = BufWriter::new(File::create(filename.as_ref())?);
        self.write_to(&mut file)?;
        file.flush()?;
        Ok(())
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), TriSubdivError> {
        if self.vertices.is_empty() {
            return Ok(());
        }
        let max_index = self.vertices.len() - 1;
        writeln!(writer, "o {}", self.name)?;

        for vertex in &self.vertices {
            writeln!(writer, "v {} {} 0", vertex.x(), vertex.y())?;
        }

        for face in self.indices.chunks(3) {
            write!(writer, "f")?;
            for element in face {
                if *element > max_index {
                    return Err(TriSubdivError::InternalError(format!(
                        "the vertex index was too high {element} > {max_index}"
                    )));
                }
                // Remember, .obj uses 1-based indexing, so we add 1 to each index
                write!(writer, " {}", element + 1)?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}
