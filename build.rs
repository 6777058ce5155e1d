// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("placeholder-apk")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Report System Contributors")
        .about("Build a placeholder .apk archive for download-link testing")
        .subcommand_required(false)
        .subcommand(
            Command::new("build")
                .about("Build the placeholder archive (the default when no command is given)")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("PATH")
                        .default_value("apk/report-system-app.apk")
                        .help("Output archive path; its parent directory must already exist"),
                )
                .arg(
                    Arg::new("workdir")
                        .short('w')
                        .long("workdir")
                        .value_name("DIR")
                        .default_value("temp_demo_apk")
                        .help("Temporary workspace directory, removed after the build"),
                )
                .arg(
                    Arg::new("store")
                        .long("store")
                        .action(ArgAction::SetTrue)
                        .help("Store entries without compression"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("List the entries of a placeholder archive and check its layout")
                .arg(Arg::new("path").required(true).help("Path to the archive"))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = match env::var("OUT_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=OUT_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = out_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("placeholder-apk.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
