use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    link_sdl2_libraries();
}

fn link_sdl2_libraries() {
    #[cfg(target_os = "macos")]
    {
        if let Ok(true) = is_homebrew_available() {
            match get_homebrew_path("sdl2") {
                Ok(sdl2_path) => {
                    println!("cargo:rustc-link-search={}/lib", sdl2_path);
                    println!("cargo:rustc-link-lib=SDL2");
                }
                Err(e) => {
                    println!("cargo:warning={}. Install it with 'brew install sdl2'", e);
                }
            }
        } else {
            println!("cargo:warning=Homebrew not found, SDL2 must be installed manually");
        }
    }

    #[cfg(target_os = "linux")]
    {
        println!("On Linux, install SDL2 with your package manager, e.g. sudo apt-get install libsdl2-dev");
    }

    #[cfg(target_os = "windows")]
    {
        println!("On Windows, make sure SDL2.dll and SDL2.lib are on the library path");
    }
}

#[allow(dead_code)]
fn is_homebrew_available() -> Result<bool, String> {
    match Command::new("brew").arg("--version").output() {
        Ok(_) => Ok(true),
        Err(_) => Ok(false),
    }
}

#[allow(dead_code)]
fn get_homebrew_path(package: &str) -> Result<String, String> {
    match Command::new("brew").args(["--prefix", package]).output() {
        Ok(output) => {
            if output.status.success() {
                let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
                Ok(path)
            } else {
                Err(format!("Package {} not found in homebrew", package))
            }
        }
        Err(e) => Err(format!("Failed to execute brew command: {}", e)),
    }
}
