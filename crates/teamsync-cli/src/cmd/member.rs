//! `tsy member` — team-member directory management.

use clap::{Args, Subcommand};
use std::io::Write as _;
use teamsync_core::model::User;

use crate::cmd::open_synced_store;
use crate::output::{render, render_success, OutputMode};

#[derive(Subcommand, Debug)]
pub enum MemberCommand {
    #[command(about = "Create a member and push it to the Team Members sheet")]
    Add(MemberAddArgs),

    #[command(about = "List team members")]
    List,
}

#[derive(Args, Debug)]
pub struct MemberAddArgs {
    /// Full name; doubles as the member's id.
    pub name: String,

    /// Email address.
    #[arg(long, default_value = "")]
    pub email: String,
}

pub fn run_member(command: &MemberCommand, output: OutputMode) -> anyhow::Result<()> {
    match command {
        MemberCommand::Add(args) => {
            let mut store = open_synced_store()?;
            if !store.add_member(&args.name, &args.email) {
                anyhow::bail!("member already exists or has no name: '{}'", args.name);
            }
            render_success(output, &format!("Added member {}", args.name))
        }
        MemberCommand::List => {
            let store = open_synced_store()?;
            let members: Vec<User> = store.model().users.clone();
            render(output, &members, |members, w| {
                for member in members {
                    if member.email.is_empty() {
                        writeln!(w, "{}", member.name)?;
                    } else {
                        writeln!(w, "{:<24} {}", member.name, member.email)?;
                    }
                }
                Ok(())
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_add_takes_name_and_optional_email() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: MemberAddArgs,
        }
        let w = Wrapper::parse_from(["test", "Bob Smith", "--email", "bob@company.com"]);
        assert_eq!(w.args.name, "Bob Smith");
        assert_eq!(w.args.email, "bob@company.com");

        let bare = Wrapper::parse_from(["test", "Bob Smith"]);
        assert!(bare.args.email.is_empty());
    }
}
