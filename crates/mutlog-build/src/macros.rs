//! Build-script helper that generates mutators for one root record.
//!
//! `mutlog::build!("src/model.rs", "Root")` loads the schema from the given
//! file, directory or JSON schema and writes `$OUT_DIR/<root>_mutator.rs`,
//! ready to be `include!`d next to the records. The enclosing function must
//! return a `Result` whose error accepts `Box<dyn Error>` conversions.
#[macro_export]
macro_rules! build {
    ($source:expr, $root:expr) => {{
        use std::{env::var, fs::File, io::Write, path::PathBuf};

        //
        // CARGO
        //

        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed={}", $source);

        // Get the output directory set by Cargo
        let out_dir = var("OUT_DIR")?;

        //
        // MUTATOR CODE
        //

        let output = ::mutlog::build::generate_file($source, $root)?;

        // write the file
        let mutator_file = PathBuf::from(out_dir).join(::mutlog::build::output_file_name($root));
        let mut file = File::create(mutator_file)?;
        file.write_all(output.as_bytes())?;
    }};
}
