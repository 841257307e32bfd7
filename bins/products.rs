//! Product catalog service.

mod launch;

fn main() -> std::process::ExitCode {
    launch::main(server::ServiceKind::Products)
}
