use serde_json::Value;

/// Top-level key holding the named server integrations
pub const SERVERS_KEY: &str = "mcpServers";

/// Descriptor key holding the server's argument list
pub const ARGS_KEY: &str = "args";

/// Outcome of looking up a server entry in the configuration
#[derive(Debug, Clone, PartialEq)]
pub enum Inspection {
    /// The document has no `mcpServers` section
    NoServers,
    /// `mcpServers` exists but has no entry under the requested name
    ServerMissing,
    /// The entry exists and was checked
    Found(ServerReport),
}

/// A located server descriptor together with its verdict
#[derive(Debug, Clone, PartialEq)]
pub struct ServerReport {
    /// The descriptor exactly as it appears in the document
    pub descriptor: Value,
    pub verdict: Verdict,
}

/// Result of checking a descriptor's `args` against the expected directories
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    NoArgs,
    Correct,
    WrongDirectories { args: Value },
}

/// Locate `mcpServers.<server_name>` and check its `args`
pub fn inspect(document: &Value, server_name: &str, expected: &[String]) -> Inspection {
    let Some(servers) = document.get(SERVERS_KEY) else {
        return Inspection::NoServers;
    };

    // Non-object sections carry no named entries.
    let Some(descriptor) = servers.as_object().and_then(|map| map.get(server_name)) else {
        return Inspection::ServerMissing;
    };

    let verdict = match descriptor.get(ARGS_KEY) {
        None => Verdict::NoArgs,
        Some(args) if expected.iter().all(|dir| contains(args, dir)) => Verdict::Correct,
        Some(args) => Verdict::WrongDirectories { args: args.clone() },
    };

    Inspection::Found(ServerReport {
        descriptor: descriptor.clone(),
        verdict,
    })
}

/// Membership test for an `args` value of any JSON type
///
/// Arrays match on an equal string element, strings on substring, objects on
/// key presence. Scalars contain nothing.
fn contains(args: &Value, needle: &str) -> bool {
    match args {
        Value::Array(items) => items.iter().any(|item| item.as_str() == Some(needle)),
        Value::String(s) => s.contains(needle),
        Value::Object(map) => map.contains_key(needle),
        _ => false,
    }
}
