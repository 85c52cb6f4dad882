use crate::{
    error::CommandError,
    location::{Axis, Location},
    store::LocationStore,
};

pub const PREFIX: &str = "#";
pub const VERSION: &str = "V1.1";
pub const EMPTY_LIST_HINT: &str = "Use #save to add a location!";
pub const HELP: &str = "#save <name> <x> <y> <z>: save a location\n\
    #delete <name>: delete a location\n\
    #list: Show all saved locations\n\
    #help: Display help\n\
    #version: Display bot version\n";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Save { name: String, location: Location },
    Delete { name: String },
    List,
    Help,
    Version,
}

/// What a command answers with. `Block` holds multi-line text that should be shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Block(String),
}

impl Command {
    /// Returns `Ok(None)` for lines that are not commands at all, so ordinary chat is left alone.
    ///
    /// Tokens are split on every single space: `"#delete  home"` has three tokens, the middle one empty.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let parts = line.split(' ').collect::<Vec<_>>();
        let Some(message_type) = parts[0].strip_prefix(PREFIX) else { return Ok(None) };

        let cmd = match message_type {
            "save" => {
                expect_parts(&parts, 5)?;
                let mut coords = [0.0; 3];
                for ((coord, part), axis) in coords.iter_mut().zip(&parts[2..]).zip(Axis::ALL) {
                    *coord = parse_coord(part, axis)?;
                }
                let [x, y, z] = coords;
                Command::Save {
                    name: parts[1].to_owned(),
                    location: Location::new(x, y, z),
                }
            }
            "delete" => {
                expect_parts(&parts, 2)?;
                Command::Delete {
                    name: parts[1].to_owned(),
                }
            }
            "list" => Command::List,
            "help" => Command::Help,
            "version" => Command::Version,
            _ => return Ok(None),
        };
        Ok(Some(cmd))
    }

    pub fn execute(self, store: &mut LocationStore) -> Result<Reply, CommandError> {
        use Reply::*;
        Ok(match self {
            Command::Save { name, location } => {
                store.set(name, location);
                Text("Saved Location!".to_owned())
            }
            Command::Delete { name } => {
                store.delete(&name)?;
                Text(format!("Deleted {name}!"))
            }
            Command::List => {
                let list = store.render();
                if list.is_empty() {
                    Block(EMPTY_LIST_HINT.to_owned())
                } else {
                    Block(list)
                }
            }
            Command::Help => Block(HELP.to_owned()),
            Command::Version => Text(VERSION.to_owned()),
        })
    }
}

/// Out-of-range literals such as `1e400`, and the `NaN`/`inf` spellings, are rejected because
/// the store file can only hold finite numbers.
fn parse_coord(part: &str, axis: Axis) -> Result<f64, CommandError> {
    match part.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CommandError::NumberFormat { axis }),
    }
}

fn expect_parts(parts: &[&str], expected: usize) -> Result<(), CommandError> {
    if parts.len() != expected {
        return Err(CommandError::ArgumentCount {
            expected,
            got: parts.len(),
        });
    }
    Ok(())
}
