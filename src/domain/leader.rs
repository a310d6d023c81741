use serde::{Deserialize, Serialize};

/// Member of the restaurant's leadership team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub designation: String,
    pub abbr: String,
    #[serde(default)]
    pub featured: bool,
    pub description: String,
}

/// Leadership team used when the configuration does not list one.
pub fn default_leaders() -> Vec<Leader> {
    let leader = |id, name: &str, image: &str, designation: &str, abbr: &str, description: &str| {
        Leader {
            id,
            name: name.into(),
            image: format!("images/{image}.png"),
            designation: designation.into(),
            abbr: abbr.into(),
            featured: false,
            description: description.into(),
        }
    };

    vec![
        leader(
            0,
            "Peter Pan",
            "alberto",
            "Chief Epicurious Officer",
            "CEO",
            "Our CEO, Peter, credits his hardworking East Asian immigrant parents who \
             undertook the arduous journey to the shores of America with the intention of \
             giving their children the best future.",
        ),
        leader(
            1,
            "Dhanasekaran Witherspoon",
            "alberto",
            "Chief Food Officer",
            "CFO",
            "Our CFO, Danny, as he is affectionately referred to by his colleagues, comes \
             from a long established family tradition in farming and produce.",
        ),
        leader(
            2,
            "Agumbe Tang",
            "alberto",
            "Chief Taste Officer",
            "CTO",
            "Blessed with the most discerning gustatory sense, Agumbe, our CTO, \
             personally ensures that every dish that we serve meets his exacting tastes.",
        ),
        Leader {
            featured: true,
            ..leader(
                3,
                "Alberto Somayya",
                "alberto",
                "Executive Chef",
                "EC",
                "Award winning three-star Michelin chef with wide International experience \
                 having worked closely with whos-who in the culinary world.",
            )
        },
    ]
}
