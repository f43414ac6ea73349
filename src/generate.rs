// src/generate.rs
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use crate::error::ScaffoldError;
use crate::install::Installer;
use crate::manifest::PackageManifest;
use crate::materialize::Materializer;
use crate::project::{resolve_target, ProjectRequest, ResolvedProject};
use crate::templates::{self, TemplateOptions};

pub fn run_generate(request: &ProjectRequest) -> Result<(), ScaffoldError> {
  info!("Running generate...");
  debug!("Request: {:?}", request);

  // --- 1. Resolve Target ---
  let resolved = resolve_target(&request.name)?;
  let installer = Installer::new(&resolved.root);

  generate_into(request, &resolved, &installer)?;

  // --- 9. Summary ---
  info!(
    "Successfully generated project in '{}'!",
    resolved.root.display()
  );
  println!();
  println!("Done. Next steps:");
  println!("  cd {}", request.name);
  println!("  npm run dev");
  Ok(())
}

/// The pipeline proper, with the installer supplied by the caller.
/// Steps run in fixed order; nothing is retried, and nothing already
/// written is undone when a later step fails.
fn generate_into(
  request: &ProjectRequest,
  resolved: &ResolvedProject,
  installer: &Installer,
) -> Result<(), ScaffoldError> {
  let options = TemplateOptions {
    use_typescript: request.use_typescript,
  };

  // --- 2. Check Target ---
  if resolved.root.exists() {
    return Err(ScaffoldError::TargetExists(resolved.root.clone()));
  }

  println!("Creating a new React app in {}.", resolved.root.display());

  // --- 3. Project Root & Manifest ---
  let materializer = Materializer::new(resolved.root.clone());
  materializer.create_root()?;
  let manifest = PackageManifest::new(&resolved.package_name);
  materializer.write("package.json", &manifest.render()?)?;

  // --- 4. Public Shell ---
  materializer.mkdir("public")?;
  materializer.write("public/index.html", templates::INDEX_HTML)?;

  // --- 5. Application Sources ---
  let extension = options.source_extension();
  materializer.mkdir("src")?;
  materializer.write(&format!("src/App.{}", extension), options.app_source())?;
  materializer.write(&format!("src/index.{}", extension), options.index_source())?;

  // --- 6. Dependencies ---
  let packages = templates::dependency_names(&options);
  info!("Installing {} packages...", packages.len());
  let pb = ProgressBar::new(packages.len() as u64);
  pb.set_style(
    ProgressStyle::default_bar()
      .template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
      )
      .expect("Failed to set progress bar style") // Panic if template is invalid
      .progress_chars("#>-"),
  );
  let failed = installer.install_all(&packages, &pb)?;
  pb.finish_with_message("Dependency installation complete.");

  // --- 7. Bundler & Transpiler Configuration ---
  materializer.write("webpack.config.js", templates::webpack_config(&options))?;
  materializer.write(".babelrc", templates::BABELRC)?;

  // --- 8. Type-checker Configuration ---
  if request.use_typescript {
    materializer.write("tsconfig.json", templates::TSCONFIG)?;
  }

  // Failures collected under the warn-and-continue policy surface here,
  // after the tree is complete.
  if !failed.is_empty() {
    return Err(ScaffoldError::InstallFailures { packages: failed });
  }

  Ok(())
}
