use ipset_create::RequestDoc;
use std::process;

#[derive(Default)]
pub struct SchemaModeCommand {
    doc: RequestDoc,
}

impl SchemaModeCommand {
    pub fn new() -> Self {
        Self { doc: RequestDoc }
    }
}

impl super::Command for SchemaModeCommand {
    fn execute(&mut self) {
        match self.doc.get_full_scheme() {
            Ok(scheme) => {
                println!("{scheme}");
                println!("{}", self.doc.get_examples());
            }
            Err(e) => {
                eprintln!("Failed to render request schema: {e}");
                process::exit(1);
            }
        }
    }
}
