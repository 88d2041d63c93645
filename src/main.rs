use std::{env, fs::read_to_string, path::Path, process::exit};

use stapl::{
    ast::printer::dump_module,
    compile_module,
    errors::errors::Error,
    parser::parser::parse_module,
    CompileOptions,
};
use tracing::{debug, Level};

const USAGE: &str = "usage: staplc <file> [--dump-ast] [--emit-source] [--verbose]";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match CompileOptions::from_args(&args) {
        Some(options) => options,
        None => {
            eprintln!("{}", USAGE);
            exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(if options.verbose { Level::DEBUG } else { Level::WARN })
        .with_target(false)
        .init();

    let source = match read_to_string(&options.source_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: cannot read {}: {}", options.source_path.display(), error);
            exit(1);
        }
    };
    debug!(module = %options.module_name, bytes = source.len(), "read source");

    if let Err(error) = run(&options, &source) {
        display_error(&error, &options.source_path);
        exit(1);
    }
}

fn run(options: &CompileOptions, source: &str) -> Result<(), Error> {
    if options.dump_ast || options.emit_source {
        let module = parse_module(&options.module_name, source)?;
        if options.dump_ast {
            println!("{}", dump_module(&module));
        }
        if options.emit_source {
            println!("{}", module);
        }
        return Ok(());
    }

    let (module, annotator) = compile_module(&options.module_name, source)?;
    let mut printed: Vec<&str> = vec![];
    for decl in module.decls.iter() {
        let name = decl.name();
        if printed.contains(&name) {
            continue;
        }
        printed.push(name);

        for overload in annotator.get_overloads(name).unwrap_or_default() {
            println!("{}{}", name, overload);
        }
    }

    Ok(())
}

fn display_error(error: &Error, file: &Path) {
    /*
        Error: VariableNotDeclared (unresolved reference)
        -> fib.stapl
           unresolved reference: variable "x" not declared
    */

    eprintln!("Error: {} ({})", error.get_error_name(), error.category());
    eprintln!("-> {}", file.display());
    eprintln!("   {}", error);
}
