#![allow(clippy::module_inception)]

use std::path::{Path, PathBuf};

use crate::{
    ast::declarations::Module,
    errors::errors::Error,
    parser::parser::parse_module,
    type_checker::type_checker::{annotate_module, TypeAnnotator},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// Options of one `staplc` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    pub source_path: PathBuf,
    pub module_name: String,
    pub dump_ast: bool,
    pub emit_source: bool,
    pub verbose: bool,
}

impl CompileOptions {
    /// Reads `<file> [--dump-ast] [--emit-source] [--verbose]`, without the
    /// program name. Returns `None` on a missing file or an unknown flag.
    pub fn from_args(args: &[String]) -> Option<CompileOptions> {
        let mut source_path = None;
        let mut dump_ast = false;
        let mut emit_source = false;
        let mut verbose = false;

        for arg in args {
            match arg.as_str() {
                "--dump-ast" => dump_ast = true,
                "--emit-source" => emit_source = true,
                "--verbose" => verbose = true,
                flag if flag.starts_with("--") => return None,
                path if source_path.is_none() => source_path = Some(PathBuf::from(path)),
                _ => return None,
            }
        }

        let source_path = source_path?;
        Some(CompileOptions {
            module_name: module_name_for(&source_path),
            source_path,
            dump_ast,
            emit_source,
            verbose,
        })
    }
}

/// Module name for a source file: its file stem.
pub fn module_name_for(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("main"))
}

/// Parses and annotates `source` as the module `module_name`.
pub fn compile_module(module_name: &str, source: &str) -> Result<(Module, TypeAnnotator), Error> {
    let mut module = parse_module(module_name, source)?;
    let mut annotator = TypeAnnotator::new();
    annotate_module(&mut annotator, &mut module)?;

    Ok((module, annotator))
}
