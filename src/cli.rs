use clap::{Arg, ArgAction, Command};

use crate::constants::{DEFAULT_PERM, ENV_DEBUG, ENV_SERVER, ENV_TOKEN};

fn id_arg(help: &'static str) -> Arg {
    Arg::new("id")
        .long("id")
        .short('i')
        .value_name("ID")
        .help(help)
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("TEMPLATE")
        .help("Custom output format")
        .hide(true)
}

fn text_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help)
}

fn flag_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .num_args(0..=1)
        .require_equals(true)
        .default_missing_value("true")
        .value_parser(clap::value_parser!(bool))
}

fn perm_arg() -> Arg {
    Arg::new("perm")
        .long("perm")
        .value_name("PERM")
        .help("Permission, can be user, admin or owner")
        .default_value(DEFAULT_PERM)
}

fn user_peer_arg(help: &'static str) -> Arg {
    Arg::new("user")
        .long("user")
        .short('u')
        .value_name("USER")
        .help(help)
}

fn team_peer_arg(help: &'static str) -> Arg {
    Arg::new("team")
        .long("team")
        .short('t')
        .value_name("TEAM")
        .help(help)
}

pub fn build_cli() -> Command {
    Command::new("gomematic-cli")
        .about("Lightweight and powerful homematic")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("server")
                .long("server")
                .short('s')
                .value_name("URL")
                .help("API server [default: http://localhost:8080]")
                .env(ENV_SERVER),
        )
        .arg(
            Arg::new("token")
                .long("token")
                .short('t')
                .value_name("TOKEN")
                .help("API token")
                .env(ENV_TOKEN)
                .hide_env_values(true),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Write a debug log to the cache directory")
                .env(ENV_DEBUG)
                .action(ArgAction::SetTrue)
                .hide(true),
        )
        .subcommand(profile_command())
        .subcommand(team_command())
        .subcommand(user_command())
}

fn profile_command() -> Command {
    Command::new("profile")
        .about("Profile commands")
        .subcommand_required(true)
        .subcommand(
            Command::new("login")
                .about("Login by credentials")
                .arg(text_arg("username", "Username for authentication"))
                .arg(text_arg("password", "Password for authentication"))
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("token")
                .about("Show your token")
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Show profile details")
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("update")
                .about("Update profile details")
                .arg(text_arg("slug", "Provide a slug"))
                .arg(text_arg("email", "Provide an email"))
                .arg(text_arg("username", "Provide an username"))
                .arg(text_arg("password", "Provide a password")),
        )
}

fn team_command() -> Command {
    Command::new("team")
        .about("Team commands")
        .subcommand_required(true)
        .subcommand(
            Command::new("list")
                .visible_alias("ls")
                .about("List all teams")
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Show a team")
                .arg(id_arg("Team id or slug"))
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("delete")
                .visible_alias("rm")
                .about("Delete a team")
                .arg(id_arg("Team id or slug")),
        )
        .subcommand(
            Command::new("update")
                .about("Update a team")
                .arg(id_arg("Team id or slug"))
                .arg(text_arg("slug", "Provide a slug"))
                .arg(text_arg("name", "Provide a name")),
        )
        .subcommand(
            Command::new("create")
                .about("Create a team")
                .arg(text_arg("slug", "Provide a slug"))
                .arg(text_arg("name", "Provide a name")),
        )
        .subcommand(
            Command::new("user")
                .about("User assignments")
                .subcommand_required(true)
                .subcommand(
                    Command::new("list")
                        .visible_alias("ls")
                        .about("List assigned users for a team")
                        .arg(id_arg("Team id or slug"))
                        .arg(format_arg()),
                )
                .subcommand(
                    Command::new("append")
                        .about("Append a user to team")
                        .arg(id_arg("Team id or slug"))
                        .arg(user_peer_arg("User id or slug"))
                        .arg(perm_arg()),
                )
                .subcommand(
                    Command::new("perm")
                        .about("Update team user permissions")
                        .arg(id_arg("Team id or slug"))
                        .arg(user_peer_arg("User id or slug"))
                        .arg(perm_arg()),
                )
                .subcommand(
                    Command::new("remove")
                        .visible_alias("rm")
                        .about("Remove a user from a team")
                        .arg(id_arg("Team id or slug"))
                        .arg(user_peer_arg("User id or slug")),
                ),
        )
}

fn user_command() -> Command {
    Command::new("user")
        .about("User commands")
        .subcommand_required(true)
        .subcommand(
            Command::new("list")
                .visible_alias("ls")
                .about("List all users")
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Show an user")
                .arg(id_arg("User id or slug"))
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("delete")
                .visible_alias("rm")
                .about("Delete an user")
                .arg(id_arg("User id or slug")),
        )
        .subcommand(
            Command::new("update")
                .about("Update an user")
                .arg(id_arg("User id or slug"))
                .arg(text_arg("slug", "Provide a slug"))
                .arg(text_arg("email", "Provide an email"))
                .arg(text_arg("username", "Provide an username"))
                .arg(text_arg("password", "Provide a password"))
                .arg(flag_arg("active", "Mark user as active"))
                .arg(flag_arg("admin", "Mark user as admin")),
        )
        .subcommand(
            Command::new("create")
                .about("Create an user")
                .arg(text_arg("slug", "Provide a slug"))
                .arg(text_arg("email", "Provide an email"))
                .arg(text_arg("username", "Provide an username"))
                .arg(text_arg("password", "Provide a password"))
                .arg(flag_arg("active", "Mark user as active"))
                .arg(flag_arg("admin", "Mark user as admin")),
        )
        .subcommand(
            Command::new("team")
                .about("Team assignments")
                .subcommand_required(true)
                .subcommand(
                    Command::new("list")
                        .visible_alias("ls")
                        .about("List assigned teams for a user")
                        .arg(id_arg("User id or slug"))
                        .arg(format_arg()),
                )
                .subcommand(
                    Command::new("append")
                        .about("Append a team to an user")
                        .arg(id_arg("User id or slug"))
                        .arg(team_peer_arg("Team id or slug"))
                        .arg(perm_arg()),
                )
                .subcommand(
                    Command::new("perm")
                        .about("Update user team permissions")
                        .arg(id_arg("User id or slug to update"))
                        .arg(team_peer_arg("Team id or slug to update"))
                        .arg(perm_arg()),
                )
                .subcommand(
                    Command::new("remove")
                        .visible_alias("rm")
                        .about("Remove a team from an user")
                        .arg(id_arg("User id or slug to remove from"))
                        .arg(team_peer_arg("Team id or slug to remove")),
                ),
        )
}
