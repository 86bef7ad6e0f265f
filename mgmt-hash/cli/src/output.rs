use mgmt_hash::PasswordHashes;

/// How the generated hashes are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// `{"web_hash": ..., "admin_hash": ...}`, pretty-printed
    Json,
    /// Terraform variable assignments
    Tfvars,
}

impl OutputFormat {
    pub fn from_flags(json: bool, tfvars: bool) -> Self {
        if json {
            OutputFormat::Json
        } else if tfvars {
            OutputFormat::Tfvars
        } else {
            OutputFormat::Text
        }
    }
}

/// Renders the hashes in the requested format, without a trailing newline.
pub fn render(hashes: &PasswordHashes, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(hashes)),
        OutputFormat::Json => serde_json::to_string_pretty(hashes),
        OutputFormat::Tfvars => Ok(render_tfvars(hashes)),
    }
}

fn render_text(hashes: &PasswordHashes) -> String {
    format!(
        "\n=== Generated Password Hashes ===\n\
         \nWeb Interface Password Hash (Django-style):\n\
         {}\n\
         \nOS Admin Password Hash (Linux-style):\n\
         {}\n\
         \nStore these passwords securely!",
        hashes.web_hash, hashes.admin_hash
    )
}

fn render_tfvars(hashes: &PasswordHashes) -> String {
    format!(
        "mgmt_node_admin_password_hash = \"{}\"\n\
         mgmt_node_web_password_hash   = \"{}\"",
        hashes.admin_hash, hashes.web_hash
    )
}
