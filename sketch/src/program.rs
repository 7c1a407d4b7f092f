//! Shader program construction, independent of the graphics API doing the
//! compiling. The client implements `ProgramBackend` for its WebGL context;
//! tests implement it with a fake driver.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Vertex => write!(f, "vertex"),
            Stage::Fragment => write!(f, "fragment"),
        }
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ProgramError {
    #[error("failed to create {0} shader")]
    CreateShader(Stage),
    #[error("{stage} shader compilation failed, log: {log}")]
    Compile { stage: Stage, log: String },
    #[error("shader program creation failed")]
    CreateProgram,
    #[error("shader program linking failed, log: {0}")]
    Link(String),
}

const NO_LOG: &str = "no error message";

/// The driver operations needed to turn GLSL source into a program.
pub trait ProgramBackend {
    type Shader;
    type Program;

    fn create_shader(&self, stage: Stage) -> Option<Self::Shader>;

    /// Set the source of the shader and compile it, returning the compile
    /// status.
    fn compile_shader(&self, shader: &Self::Shader, source: &str) -> bool;

    fn shader_log(&self, shader: &Self::Shader) -> Option<String>;

    fn delete_shader(&self, shader: &Self::Shader);

    fn create_program(&self) -> Option<Self::Program>;

    /// Attach both shaders and link, returning the link status.
    fn link_program(
        &self,
        program: &Self::Program,
        vertex: &Self::Shader,
        fragment: &Self::Shader,
    ) -> bool;

    fn program_log(&self, program: &Self::Program) -> Option<String>;

    fn delete_program(&self, program: &Self::Program);
}

fn compile<B: ProgramBackend>(
    backend: &B,
    stage: Stage,
    source: &str,
) -> Result<B::Shader, ProgramError> {
    let shader = backend
        .create_shader(stage)
        .ok_or(ProgramError::CreateShader(stage))?;

    if backend.compile_shader(&shader, source) {
        Ok(shader)
    } else {
        let log = backend
            .shader_log(&shader)
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| NO_LOG.to_string());
        backend.delete_shader(&shader);
        Err(ProgramError::Compile { stage, log })
    }
}

/// Compile and link a program from vertex and fragment source. Anything
/// allocated along the way is released on failure, so an `Err` leaves no
/// driver objects behind and an `Ok` always holds a linked program.
pub fn build_program<B: ProgramBackend>(
    backend: &B,
    vertex: &str,
    fragment: &str,
) -> Result<B::Program, ProgramError> {
    let vert = compile(backend, Stage::Vertex, vertex)?;
    let frag = match compile(backend, Stage::Fragment, fragment) {
        Ok(s) => s,
        Err(e) => {
            backend.delete_shader(&vert);
            return Err(e);
        }
    };

    let program = match backend.create_program() {
        Some(p) => p,
        None => {
            backend.delete_shader(&vert);
            backend.delete_shader(&frag);
            return Err(ProgramError::CreateProgram);
        }
    };

    let linked = backend.link_program(&program, &vert, &frag);

    // Shaders are flagged for deletion either way; a linked program keeps
    // them alive for as long as it needs them.
    backend.delete_shader(&vert);
    backend.delete_shader(&frag);

    if linked {
        Ok(program)
    } else {
        let log = backend
            .program_log(&program)
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| NO_LOG.to_string());
        backend.delete_program(&program);
        Err(ProgramError::Link(log))
    }
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;

    use super::*;

    /// Pretends to be a GLSL driver. A shader compiles if it has a `main`,
    /// and a program links unless the fragment stage reads a varying the
    /// vertex stage never declares.
    #[derive(Default)]
    struct FakeDriver {
        shaders: RefCell<Vec<(Stage, String, bool)>>,
        programs: RefCell<Vec<bool>>,
    }

    impl FakeDriver {
        fn live_shaders(&self) -> usize {
            self.shaders.borrow().iter().filter(|s| s.2).count()
        }

        fn live_programs(&self) -> usize {
            self.programs.borrow().iter().filter(|p| **p).count()
        }
    }

    fn varyings(src: &str) -> Vec<&str> {
        src.lines()
            .filter_map(|l| l.trim().strip_prefix("varying "))
            .collect()
    }

    impl ProgramBackend for FakeDriver {
        type Shader = usize;
        type Program = usize;

        fn create_shader(&self, stage: Stage) -> Option<usize> {
            let mut shaders = self.shaders.borrow_mut();
            shaders.push((stage, String::new(), true));
            Some(shaders.len() - 1)
        }

        fn compile_shader(&self, shader: &usize, source: &str) -> bool {
            self.shaders.borrow_mut()[*shader].1 = source.to_string();
            source.contains("void main()")
        }

        fn shader_log(&self, shader: &usize) -> Option<String> {
            let stage = self.shaders.borrow()[*shader].0;
            Some(format!("ERROR: 0:1: '{stage}' : missing main"))
        }

        fn delete_shader(&self, shader: &usize) {
            self.shaders.borrow_mut()[*shader].2 = false;
        }

        fn create_program(&self) -> Option<usize> {
            let mut programs = self.programs.borrow_mut();
            programs.push(true);
            Some(programs.len() - 1)
        }

        fn link_program(&self, _program: &usize, vertex: &usize, fragment: &usize) -> bool {
            let shaders = self.shaders.borrow();
            let declared = varyings(&shaders[*vertex].1);
            varyings(&shaders[*fragment].1)
                .iter()
                .all(|v| declared.contains(v))
        }

        fn program_log(&self, _program: &usize) -> Option<String> {
            None
        }

        fn delete_program(&self, program: &usize) {
            self.programs.borrow_mut()[*program] = false;
        }
    }

    const VERT: &str = "attribute vec2 a_position;\nvarying vec2 v_uv;\nvoid main() {}";
    const FRAG: &str = "varying vec2 v_uv;\nvoid main() {}";

    #[test]
    fn test_build_valid_program() {
        let driver = FakeDriver::default();
        let program = build_program(&driver, VERT, FRAG).unwrap();
        assert_eq!(program, 0);
        assert_eq!(driver.live_programs(), 1);
    }

    #[test]
    fn test_compile_failure_releases_shader() {
        let driver = FakeDriver::default();
        let result = build_program(&driver, "void mian() {}", FRAG);

        match result {
            Err(ProgramError::Compile { stage, log }) => {
                assert_eq!(stage, Stage::Vertex);
                assert!(log.contains("missing main"));
            }
            other => panic!("expected compile error, got {other:?}"),
        }
        assert_eq!(driver.live_shaders(), 0);
        assert_eq!(driver.live_programs(), 0);
    }

    #[test]
    fn test_fragment_failure_releases_vertex_shader() {
        let driver = FakeDriver::default();
        let result = build_program(&driver, VERT, "gl_FragColor = vec4(1.0);");
        assert!(matches!(
            result,
            Err(ProgramError::Compile {
                stage: Stage::Fragment,
                ..
            })
        ));
        assert_eq!(driver.live_shaders(), 0);
    }

    #[test]
    fn test_link_failure_never_yields_program() {
        let driver = FakeDriver::default();
        let frag = "varying vec3 v_normal;\nvoid main() {}";
        let result = build_program(&driver, VERT, frag);

        assert_eq!(result, Err(ProgramError::Link(NO_LOG.to_string())));
        assert_eq!(driver.live_programs(), 0);
        assert_eq!(driver.live_shaders(), 0);
    }
}
