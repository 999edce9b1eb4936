use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use vergen::{BuildBuilder, CargoBuilder, Emitter, RustcBuilder};
use vergen_gitcl::{Emitter as GitEmitter, GitclBuilder};

type BuildResult<T> = Result<T, Box<dyn Error>>;

/// Files the binary looks up in `<exe dir>/config` at runtime
const STAGED_CONFIGS: &[&str] = &["default.toml"];

fn main() -> BuildResult<()> {
    emit_toolchain_metadata()?;
    emit_git_metadata()?;
    stage_configs()
}

/// `VERGEN_BUILD_*`, `VERGEN_CARGO_*` and `VERGEN_RUSTC_*`, read by `build_info`
fn emit_toolchain_metadata() -> BuildResult<()> {
    let build = BuildBuilder::default().build_timestamp(true).build()?;
    let cargo = CargoBuilder::default()
        .opt_level(true)
        .target_triple(true)
        .build()?;
    let rustc = RustcBuilder::default()
        .semver(true)
        .channel(true)
        .build()?;

    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&cargo)?
        .add_instructions(&rustc)?
        .emit()?;
    Ok(())
}

/// `VERGEN_GIT_*`; `build_info` reads these with `option_env!`, so a source
/// tarball without `.git` still builds
fn emit_git_metadata() -> BuildResult<()> {
    let git = GitclBuilder::default()
        .sha(true)
        .branch(true)
        .dirty(true)
        .build()?;

    GitEmitter::default().add_instructions(&git)?.emit()?;
    Ok(())
}

/// Copies each staged config into `target/<profile>/config/`
fn stage_configs() -> BuildResult<()> {
    let dest = profile_dir(Path::new(&env::var("OUT_DIR")?))?.join("config");
    fs::create_dir_all(&dest)?;

    for name in STAGED_CONFIGS {
        let source = Path::new("config").join(name);
        println!("cargo:rerun-if-changed={}", source.display());
        if source.is_file() {
            fs::copy(&source, dest.join(name))?;
        }
    }
    Ok(())
}

/// `target/<profile>` from `target/<profile>/build/<pkg>-<hash>/out`
fn profile_dir(out_dir: &Path) -> BuildResult<PathBuf> {
    out_dir
        .ancestors()
        .nth(3)
        .map(Path::to_path_buf)
        .ok_or_else(|| format!("unexpected OUT_DIR layout: {}", out_dir.display()).into())
}
