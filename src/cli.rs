use clap::Parser;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None, arg_required_else_help(true))]
pub struct Cli {
    #[clap(help = "Type expression, e.g. '*const [5]int' or 'fn(int, ...) int'")]
    pub type_expr: String,

    #[clap(help = "Variable name to declare; omit for the bare type spelling")]
    pub name: Option<String>,

    #[clap(long, help = "Dump the parsed type tree to stderr")]
    pub dump_tree: bool,
}
