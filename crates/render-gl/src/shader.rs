use crate::RenderError;
use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};
use glow::HasContext;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where a program's GLSL came from; file-backed programs can `reload`.
#[derive(Debug, Clone)]
enum ShaderSource {
    Memory,
    Files { vertex: PathBuf, fragment: PathBuf },
}

/// One compiled and linked GPU program with typed uniform setters.
///
/// Compile or link failure does not error out: the failure text is logged
/// and the program stays inert. Callers that skip `is_valid()` render
/// nothing, which is the original contract.
///
/// Uniform locations are resolved once and cached; the cache belongs to the
/// program and is cleared whenever the program is replaced.
pub struct ShaderProgram {
    program: Option<glow::Program>,
    valid: bool,
    source: ShaderSource,
    uniform_cache: HashMap<String, Option<glow::UniformLocation>>,
}

impl ShaderProgram {
    /// Compile and link from in-memory GLSL. Check `is_valid()` afterwards.
    pub fn from_sources(gl: &glow::Context, vertex_src: &str, fragment_src: &str) -> Self {
        let (program, valid) = build_program(gl, vertex_src, fragment_src);
        Self {
            program,
            valid,
            source: ShaderSource::Memory,
            uniform_cache: HashMap::new(),
        }
    }

    /// Compile and link from source files, remembering the paths so the
    /// program can be reloaded in place.
    pub fn from_files(
        gl: &glow::Context,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, RenderError> {
        let vertex = vertex_path.as_ref().to_path_buf();
        let fragment = fragment_path.as_ref().to_path_buf();
        let vertex_src = read_source(&vertex)?;
        let fragment_src = read_source(&fragment)?;

        let (program, valid) = build_program(gl, &vertex_src, &fragment_src);
        Ok(Self {
            program,
            valid,
            source: ShaderSource::Files { vertex, fragment },
            uniform_cache: HashMap::new(),
        })
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Activate the program, or log and no-op when it never linked.
    pub fn use_program(&self, gl: &glow::Context) {
        if self.valid {
            unsafe { gl.use_program(self.program) }
        } else {
            tracing::error!("shader program is not valid; use_program skipped");
        }
    }

    /// Re-run compilation from the original source paths, replacing the
    /// program in place and invalidating the location cache.
    pub fn reload(&mut self, gl: &glow::Context) -> Result<(), RenderError> {
        let ShaderSource::Files { vertex, fragment } = self.source.clone() else {
            return Err(RenderError::NoReloadSource);
        };
        let vertex_src = read_source(&vertex)?;
        let fragment_src = read_source(&fragment)?;

        if let Some(old) = self.program.take() {
            unsafe { gl.delete_program(old) }
        }
        self.uniform_cache.clear();
        self.valid = false;

        let (program, valid) = build_program(gl, &vertex_src, &fragment_src);
        self.program = program;
        self.valid = valid;
        tracing::info!(valid, "shader program reloaded");
        Ok(())
    }

    /// Uncached existence probe for a uniform name.
    pub fn has_uniform(&self, gl: &glow::Context, name: &str) -> bool {
        match self.program {
            Some(program) if self.valid => {
                unsafe { gl.get_uniform_location(program, name) }.is_some()
            }
            _ => false,
        }
    }

    pub fn set_bool(&mut self, gl: &glow::Context, name: &str, value: bool) {
        self.set_int(gl, name, i32::from(value));
    }

    pub fn set_int(&mut self, gl: &glow::Context, name: &str, value: i32) {
        if let Some(location) = self.location(gl, name) {
            unsafe { gl.uniform_1_i32(Some(&location), value) }
        }
    }

    pub fn set_float(&mut self, gl: &glow::Context, name: &str, value: f32) {
        if let Some(location) = self.location(gl, name) {
            unsafe { gl.uniform_1_f32(Some(&location), value) }
        }
    }

    pub fn set_vec2(&mut self, gl: &glow::Context, name: &str, value: Vec2) {
        if let Some(location) = self.location(gl, name) {
            unsafe { gl.uniform_2_f32_slice(Some(&location), &value.to_array()) }
        }
    }

    pub fn set_vec3(&mut self, gl: &glow::Context, name: &str, value: Vec3) {
        if let Some(location) = self.location(gl, name) {
            unsafe { gl.uniform_3_f32_slice(Some(&location), &value.to_array()) }
        }
    }

    pub fn set_vec4(&mut self, gl: &glow::Context, name: &str, value: Vec4) {
        if let Some(location) = self.location(gl, name) {
            unsafe { gl.uniform_4_f32_slice(Some(&location), &value.to_array()) }
        }
    }

    pub fn set_mat3(&mut self, gl: &glow::Context, name: &str, value: &Mat3) {
        if let Some(location) = self.location(gl, name) {
            unsafe {
                gl.uniform_matrix_3_f32_slice(Some(&location), false, &value.to_cols_array())
            }
        }
    }

    pub fn set_mat4(&mut self, gl: &glow::Context, name: &str, value: &Mat4) {
        if let Some(location) = self.location(gl, name) {
            unsafe {
                gl.uniform_matrix_4_f32_slice(Some(&location), false, &value.to_cols_array())
            }
        }
    }

    /// Release the program handle. Idempotent.
    pub fn destroy(&mut self, gl: &glow::Context) {
        if let Some(program) = self.program.take() {
            unsafe { gl.delete_program(program) }
        }
        self.valid = false;
        self.uniform_cache.clear();
    }

    /// Resolve a uniform location through the cache. A missing name warns
    /// once and stays cached as absent, so every later set is a cheap no-op.
    fn location(&mut self, gl: &glow::Context, name: &str) -> Option<glow::UniformLocation> {
        let program = self.program?;
        if let Some(cached) = self.uniform_cache.get(name) {
            return cached.clone();
        }
        let location = unsafe { gl.get_uniform_location(program, name) };
        if location.is_none() {
            tracing::warn!(uniform = name, "uniform not found in shader program");
        }
        self.uniform_cache
            .insert(name.to_owned(), location.clone());
        location
    }
}

fn read_source(path: &Path) -> Result<String, RenderError> {
    std::fs::read_to_string(path).map_err(|source| RenderError::ShaderSourceIo {
        path: path.to_path_buf(),
        source,
    })
}

/// Compile both stages and link. Returns the program handle (if the driver
/// allocated one) and whether the result is usable.
fn build_program(
    gl: &glow::Context,
    vertex_src: &str,
    fragment_src: &str,
) -> (Option<glow::Program>, bool) {
    let vertex = match compile_stage(gl, glow::VERTEX_SHADER, "vertex", vertex_src) {
        Some(shader) => shader,
        None => return (None, false),
    };
    let fragment = match compile_stage(gl, glow::FRAGMENT_SHADER, "fragment", fragment_src) {
        Some(shader) => shader,
        None => {
            unsafe { gl.delete_shader(vertex) }
            return (None, false);
        }
    };

    let program = match unsafe { gl.create_program() } {
        Ok(program) => program,
        Err(err) => {
            tracing::error!("program allocation failed: {err}");
            unsafe {
                gl.delete_shader(vertex);
                gl.delete_shader(fragment);
            }
            return (None, false);
        }
    };

    unsafe {
        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);
        gl.detach_shader(program, vertex);
        gl.detach_shader(program, fragment);
        gl.delete_shader(vertex);
        gl.delete_shader(fragment);
    }

    let linked = unsafe { gl.get_program_link_status(program) };
    if !linked {
        let log = unsafe { gl.get_program_info_log(program) };
        tracing::error!("program link failed:\n{log}");
    }
    (Some(program), linked)
}

fn compile_stage(
    gl: &glow::Context,
    stage: u32,
    stage_name: &str,
    src: &str,
) -> Option<glow::Shader> {
    let shader = match unsafe { gl.create_shader(stage) } {
        Ok(shader) => shader,
        Err(err) => {
            tracing::error!("{stage_name} shader allocation failed: {err}");
            return None;
        }
    };
    unsafe {
        gl.shader_source(shader, src);
        gl.compile_shader(shader);
    }
    if unsafe { gl.get_shader_compile_status(shader) } {
        Some(shader)
    } else {
        let log = unsafe { gl.get_shader_info_log(shader) };
        tracing::error!("{stage_name} shader compilation failed:\n{log}");
        unsafe { gl.delete_shader(shader) }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compilation needs a live context; these cover the context-free paths.

    #[test]
    fn missing_source_file_is_an_io_error() {
        let err = read_source(Path::new("/definitely/not/here.vert")).unwrap_err();
        assert!(matches!(err, RenderError::ShaderSourceIo { .. }));
        assert!(err.to_string().contains("not/here.vert"));
    }
}
