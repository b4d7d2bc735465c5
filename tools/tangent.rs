//! Prints the tangent and bitangent of quads read from text files.
//!
//! Every file holds whitespace separated floats, four `x y z u v` vertices per
//! quad. Each quad is split into the triangles `(1, 2, 3)` and `(1, 3, 4)`,
//! and a table headed by the column names is printed with one row per emitted
//! vertex. Running without files prints nothing.

extern crate clap;
#[macro_use]
extern crate log;
extern crate lumen;

use std::fs;

use lumen::application;
use lumen::math::tangent;

fn main() {
    let matches = clap::App::new("tangent")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Computes the tangent space of textured quads")
        .arg(
            clap::Arg::with_name("files")
                .multiple(true)
                .index(1)
                .help("Files of `x y z u v` vertices, four per quad"),
        )
        .get_matches();

    application::init_logger();

    let files = matches.values_of("files").into_iter().flat_map(|v| v);
    for path in files {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                warn!("Skips {}: {}.", path, err);
                continue;
            }
        };

        let floats = tangent::parse_floats(&text);
        info!("{}: {} quads.", path, floats.len() / 20);

        print!("{}", tangent::format_file(&floats));
    }
}
