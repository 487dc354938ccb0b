//! Compiles the C++ dialect with the host compiler and runs a small driver.
//!
//! Skipped when no C++ compiler is on `PATH`.

use std::path::Path;
use std::process::Command;

use runnable_gen::{generate, GenConfig, Target};

/// Stand-ins for the XPCOM pieces the generated header names.
const RUNTIME_STUB: &str = r#"
typedef unsigned int nsresult;
#define NS_OK 0u
#define NS_IMETHOD virtual nsresult

class runnable_args_base {
 public:
  virtual ~runnable_args_base() {}
  NS_IMETHOD Run() = 0;
};
"#;

const DRIVER: &str = r#"
struct Obj {
  int last;
  Obj() : last(0) {}
  void set(int a, int b) { last = a + b; }
  unsigned code(int a) { last = a; return 7u; }
  int inc(int a) { return a + 1; }
  int nine(int a, int b, int c, int d, int e, int f, int g, int h, int i) {
    return a + 10 * b + 100 * c + 1000 * d + 10000 * e + 100000 * f + 1000000 * g + 10000000 * h + 100000000 * i;
  }
};

static int run(runnable_args_base* r) {
  nsresult rv = r->Run();
  delete r;
  return rv == NS_OK ? 0 : 1;
}

int main() {
  Obj o;
  if (run(WrapRunnable2(&o, &Obj::set, 2, 3)) || o.last != 5) return 1;
  if (run(WrapRunnable1(&o, &Obj::code, 9)) || o.last != 9) return 2;

  int out = 0;
  if (run(WrapRunnable1Ret(&o, &Obj::inc, 41, &out)) || out != 42) return 3;

  int wide = 0;
  if (run(WrapRunnable9Ret(&o, &Obj::nine, 1, 2, 3, 4, 5, 6, 7, 8, 9, &wide)) || wide != 987654321) return 4;
  return 0;
}
"#;

fn find_compiler() -> Option<&'static str> {
    ["c++", "g++", "clang++"].into_iter().find(|cxx| {
        Command::new(cxx)
            .arg("--version")
            .output()
            .is_ok_and(|out| out.status.success())
    })
}

fn compile(cxx: &str, src: &Path, bin: &Path) {
    let out = Command::new(cxx)
        .args(["-std=c++11", "-Wall", "-o"])
        .arg(bin)
        .arg(src)
        .output()
        .unwrap();
    assert!(
        out.status.success(),
        "{cxx} rejected generated header:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );
}

#[test]
fn cpp_output_compiles_and_runs() {
    let Some(cxx) = find_compiler() else {
        eprintln!("no C++ compiler on PATH; skipping");
        return;
    };

    let header = generate(&GenConfig {
        target: Target::Cpp,
        include_guard: Some("runnable_utils_generated_h__".to_string()),
        ..GenConfig::default()
    })
    .unwrap()
    .render();

    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("driver.cpp");
    let bin = dir.path().join("driver");
    // Included twice to exercise the guard.
    std::fs::write(&src, format!("{RUNTIME_STUB}\n{header}\n{header}\n{DRIVER}")).unwrap();

    compile(cxx, &src, &bin);
    let status = Command::new(&bin).status().unwrap();
    assert!(status.success(), "driver exited with {status}");
}
