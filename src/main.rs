use catalog_gen::{generate, output};
use clap::Parser;
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "catalog-gen")]
#[command(about = "Generate a product catalog JSON file from a directory of images")]
#[command(long_about = "\
Generate a product catalog JSON file from a directory of images

Your filesystem is the data source. Image filenames encode the catalog
metadata; files sharing a slug become one product with several images.

Naming convention:

  img/
  ├── ropa__bufanda-colorida__detalle-1.jpg   # categoria__slug__caption
  ├── ropa__bufanda-colorida__detalle-2.jpg   # same slug → same product
  ├── regalos__muneco-tejido__frente.jpg
  ├── ropa_bufanda_detalle.jpg                # single underscore also works
  └── photo1.jpg                              # no convention → uncategorized

Output is a JSON array of {id, name, price, description, category, images}.
Names come from the slug (bufanda-colorida → \"Bufanda Colorida\"), the
description from the first non-empty caption, and the price is always 0.0 —
price by hand after generation.

Re-runs replace the catalog wholesale but keep ids counting up from the
prior file, and archive the old catalog to archive/ first.")]
#[command(version = version_string())]
struct Cli {
    /// Image source directory
    #[arg(long, default_value = "img")]
    img_dir: PathBuf,

    /// Catalog output file
    #[arg(long, default_value = "products.json")]
    output: PathBuf,

    /// Directory for timestamped catalog backups
    #[arg(long, default_value = "archive")]
    archive_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let outcome = generate::generate(&cli.img_dir, &cli.output, &cli.archive_dir)?;
    output::print_outcome(&outcome, &cli.output);

    Ok(())
}
