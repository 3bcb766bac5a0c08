use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Error};
use log::{debug, info, warn};
use serde::Serialize;
use structopt::StructOpt;

use recommender::{
    Config,
    Error as RecommenderError,
    Evaluation,
    Interaction,
    Recommendation,
    Recommender,
    UserId,
};

use crate::exit_code::{NON_FATAL_ERROR, NO_ERROR};

/// Fit the recommender on interactions and recommend items for users.
#[derive(StructOpt, Debug)]
pub struct RecommendCmd {
    /// The users to recommend items for.
    ///
    /// This accepts the option multiple times.
    #[structopt(short, long = "user", required = true)]
    pub users: Vec<u32>,

    /// The maximum number of recommendations per user.
    #[structopt(short = "n", long, default_value = "5")]
    pub top_n: usize,

    /// The number of most similar users to recommend from.
    #[structopt(short = "k", long, default_value = "5")]
    pub neighbors: usize,

    /// Pretty prints the JSON report.
    #[structopt(long)]
    pub pretty: bool,

    /// The CSV file with `user,item,rating` interactions.
    pub interactions: PathBuf,
}

impl RecommendCmd {
    pub fn run(self) -> Result<i32, Error> {
        let RecommendCmd {
            users,
            top_n,
            neighbors,
            pretty,
            interactions,
        } = self;

        check_interactions_path(&interactions)?;

        let config = Config::default()
            .with_neighbors(neighbors)
            .context("Invalid number of neighbors.")?
            .with_top_n(top_n);
        let interactions = File::open(&interactions)
            .map_err(Error::from)
            .and_then(load_interactions)
            .context("Loading interactions failed.")?;

        let mut recommender = Recommender::new(config);
        recommender.fit(interactions);
        info!(
            "fitted the recommender on {} users and {} items",
            recommender.store().users().len(),
            recommender.store().items().len(),
        );

        let (report, errors) = report(&recommender, users.into_iter().map(UserId));
        for error in &errors {
            eprintln!("{}: {}", error.user, error.error);
        }

        let serialized = if pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        println!("{}", serialized);

        let exit_code = if errors.is_empty() {
            NO_ERROR
        } else {
            NON_FATAL_ERROR
        };

        Ok(exit_code)
    }
}

fn check_interactions_path(path: &Path) -> Result<(), Error> {
    if path.is_file() {
        Ok(())
    } else {
        Err(anyhow!("Interactions File is not a file: {}", path.display()))
    }
}

/// Reads `user,item,rating` records with a header line.
fn load_interactions(reader: impl Read) -> Result<Vec<Interaction>, Error> {
    let interactions = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<Interaction>, _>>()?;
    debug!("loaded {} interactions", interactions.len());

    Ok(interactions)
}

/// Recommends items for every user and evaluates all explanations together.
fn report(
    recommender: &Recommender,
    users: impl IntoIterator<Item = UserId>,
) -> (Report, Vec<UserError>) {
    let mut recommendations = Vec::new();
    let mut errors = Vec::new();
    for user in users {
        match recommender.recommend_default(user) {
            Ok(items) => {
                if items.is_empty() {
                    warn!("no recommendations available for user {}", user);
                }
                recommendations.push(UserRecommendations { user, items });
            }
            Err(error) => errors.push(UserError { user, error }),
        }
    }

    let explanations = recommendations
        .iter()
        .flat_map(|recommendations| &recommendations.items)
        .flat_map(|item| &item.explanation)
        .collect::<Vec<_>>();
    let evaluation = recommender.evaluate(&explanations);

    let report = Report {
        recommendations,
        evaluation,
    };

    (report, errors)
}

#[derive(Serialize)]
struct Report {
    recommendations: Vec<UserRecommendations>,
    evaluation: Evaluation,
}

#[derive(Serialize)]
struct UserRecommendations {
    user: UserId,
    items: Vec<Recommendation>,
}

struct UserError {
    user: UserId,
    error: RecommenderError,
}
