use crate::search::{
    search_engines::{AStar, SearchStatistics, BFS, DFS, UCS},
    Heuristic, Plan, SearchProblem,
};
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<A> {
    /// A goal was reached. The plan is empty if the start state is a goal.
    Success(Plan<A>),
    /// The frontier ran dry without reaching a goal
    Unsolvable,
}

impl<A> SearchResult<A> {
    pub fn plan(&self) -> Option<&Plan<A>> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            SearchResult::Unsolvable => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }
}

/// Everything a search run produces: the result and the counters gathered on
/// the way.
#[derive(Debug, Clone)]
pub struct SearchOutcome<A> {
    pub result: SearchResult<A>,
    pub statistics: SearchStatistics,
}

impl<A> SearchOutcome<A> {
    pub(super) fn finish(result: SearchResult<A>, mut statistics: SearchStatistics) -> Self {
        statistics.finalise_search();
        Self { result, statistics }
    }
}

pub trait SearchEngine<P: SearchProblem> {
    fn search(&mut self, problem: &P) -> SearchOutcome<P::Action>;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(name = "dfs", help = "Depth first search, explores the newest node first.")]
    DFS,
    #[clap(name = "bfs", help = "Breadth first search, explores the oldest node first.")]
    BFS,
    #[clap(name = "ucs", help = "Uniform cost search, explores the cheapest node first.")]
    UCS,
    #[clap(
        name = "astar",
        help = "A* search, explores the node with the lowest cost plus heuristic estimate first."
    )]
    AStar,
}

impl SearchEngineName {
    pub const ALL: [SearchEngineName; 4] = [
        SearchEngineName::BFS,
        SearchEngineName::DFS,
        SearchEngineName::UCS,
        SearchEngineName::AStar,
    ];

    /// Whether the engine consults a heuristic at all.
    pub fn uses_heuristic(&self) -> bool {
        matches!(self, SearchEngineName::AStar)
    }

    /// Run the named engine on `problem`. The heuristic is ignored by every
    /// engine but A*.
    pub fn search<P: SearchProblem>(
        &self,
        problem: &P,
        heuristic: Box<dyn Heuristic<P::State>>,
    ) -> SearchOutcome<P::Action> {
        match self {
            SearchEngineName::DFS => DFS::new().search(problem),
            SearchEngineName::BFS => BFS::new().search(problem),
            SearchEngineName::UCS => UCS::new().search(problem),
            SearchEngineName::AStar => AStar::new(heuristic).search(problem),
        }
    }
}

impl Display for SearchEngineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchEngineName::DFS => "DFS",
            SearchEngineName::BFS => "BFS",
            SearchEngineName::UCS => "UCS",
            SearchEngineName::AStar => "A*",
        };
        write!(f, "{}", name)
    }
}
