use pest::iterators::Pairs;
use pest::Parser;

#[derive(Parser)]
#[grammar = "cool.pest"]
pub struct CoolParser;

impl CoolParser {
    pub fn parse_program(program: &str) -> Result<Pairs<Rule>, Box<pest::error::Error<Rule>>> {
        Self::parse(Rule::program, program).map_err(Box::new)
    }
}
