use clap::{Arg, ArgAction, Command};

fn issue_arg() -> Arg {
    Arg::new("issue")
        .value_name("ISSUE_ID")
        .help("Issue ID")
        .required(true)
        .index(1)
}

fn label_arg() -> Arg {
    Arg::new("label")
        .value_name("LABEL")
        .help("Label ID or name")
        .required(true)
        .index(2)
}

pub fn build_cli() -> Command {
    Command::new("plane-labels")
        .about("Manage the labels of Plane issues from the command line")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("workspace")
                .long("workspace")
                .short('w')
                .value_name("SLUG")
                .help("Workspace slug (defaults to the configured workspace)")
                .global(true)
        )
        .arg(
            Arg::new("project")
                .long("project")
                .short('p')
                .value_name("PROJECT_ID")
                .help("Project ID (defaults to the configured project)")
                .global(true)
        )
        .arg(
            Arg::new("draft")
                .long("draft")
                .help("Treat the issue as an unsaved inbox issue: print label changes instead of saving them")
                .action(ArgAction::SetTrue)
                .global(true)
        )
        .subcommand(
            Command::new("auth")
                .about("Store your Plane API key")
                .arg(
                    Arg::new("api-key")
                        .long("api-key")
                        .value_name("KEY")
                        .help("Set your Plane API key")
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show current API key")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("configure")
                .about("Save default workspace, project and your project role")
                .arg(Arg::new("base-url").long("base-url").value_name("URL").help("API base URL"))
                .arg(
                    Arg::new("role")
                        .long("role")
                        .value_name("ROLE")
                        .help("Your role in the project: guest, member or admin")
                )
        )
        .subcommand(
            Command::new("show")
                .about("Show the labels of an issue")
                .arg(issue_arg())
                .arg(
                    Arg::new("disabled")
                        .long("disabled")
                        .help("Render read-only")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("set")
                .about("Replace the labels of an issue")
                .arg(issue_arg())
                .arg(
                    Arg::new("labels")
                        .value_name("LABELS")
                        .help("Label IDs or names; none clears all labels")
                        .num_args(0..)
                        .index(2)
                )
        )
        .subcommand(
            Command::new("add")
                .about("Attach a label to an issue")
                .arg(issue_arg())
                .arg(label_arg())
        )
        .subcommand(
            Command::new("remove")
                .about("Detach a label from an issue")
                .arg(issue_arg())
                .arg(label_arg())
        )
        .subcommand(
            Command::new("create")
                .about("Create a label and attach it to an issue")
                .arg(issue_arg())
                .arg(
                    Arg::new("name")
                        .long("name")
                        .short('n')
                        .value_name("NAME")
                        .help("Label name")
                        .required(true)
                )
                .arg(
                    Arg::new("color")
                        .long("color")
                        .short('c')
                        .value_name("HEX")
                        .help("Label color as #rrggbb")
                )
        )
        .subcommand(
            Command::new("list-labels")
                .about("List the labels of a project")
                .arg(
                    Arg::new("issue")
                        .long("issue")
                        .value_name("ISSUE_ID")
                        .help("Mark the labels attached to this issue")
                )
        )
}
