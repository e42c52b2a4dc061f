//! # Léxico Embutido
//!
//! Um recorte pequeno do WordNet 3.0 cobrindo as palavras das frases de
//! demonstração. Permite rodar o servidor e os testes sem um WordNet
//! instalado; para uso real, carregue o banco completo com
//! [`WordNet::from_dict_dir`].
//!
//! A ordem dos synsets na tabela define a ordem dos sentidos de cada lema
//! (sentido mais frequente primeiro), como nos arquivos `index.*`.

use crate::wordnet::{SenseCandidate, WordNet, WordNetPos};

/// Um synset do léxico embutido: `(id, pos, lemas, glosa)`.
type BuiltinSynset = (&'static str, char, &'static [&'static str], &'static str);

const SYNSETS: &[BuiltinSynset] = &[
    // ===== BANK =====
    ("bank.n.01", 'n', &["bank"], "sloping land (especially the slope beside a body of water)"),
    ("depository_financial_institution.n.01", 'n', &["depository_financial_institution", "bank", "banking_concern", "banking_company"], "a financial institution that accepts deposits and channels the money into lending activities"),
    ("bank.n.03", 'n', &["bank"], "a long ridge or pile"),
    ("bank.n.04", 'n', &["bank"], "an arrangement of similar objects in a row or in tiers"),
    ("bank.n.05", 'n', &["bank"], "a supply or stock held in reserve for future use (especially in emergencies)"),
    ("bank.n.06", 'n', &["bank"], "the funds held by a gambling house or the dealer in some gambling games"),
    ("bank.n.07", 'n', &["bank", "cant", "camber"], "a slope in the turn of a road or track; the outside is higher than the inside in order to reduce the effects of centrifugal force"),
    ("savings_bank.n.02", 'n', &["savings_bank", "coin_bank", "money_box", "bank"], "a container (usually with a slot in the top) for keeping money at home"),
    ("bank.n.09", 'n', &["bank", "bank_building"], "a building in which the business of banking transacted"),
    ("bank.n.10", 'n', &["bank"], "a flight maneuver; aircraft tips laterally about its longitudinal axis (especially in turning)"),
    ("bank.v.01", 'v', &["bank"], "tip laterally"),
    ("bank.v.02", 'v', &["bank"], "enclose with a bank"),
    ("bank.v.03", 'v', &["bank"], "do business with a bank or keep an account at a bank"),
    ("deposit.v.01", 'v', &["deposit", "lodge", "wedge"], "put, fix, force, or implant"),
    ("deposit.v.02", 'v', &["deposit", "bank"], "put into a bank account"),
    // ===== BASS =====
    ("bass.n.01", 'n', &["bass"], "the lowest part of the musical range"),
    ("bass.n.02", 'n', &["bass", "bass_part"], "the lowest part in polyphonic music"),
    ("bass.n.03", 'n', &["bass", "basso"], "an adult male singer with the lowest voice"),
    ("sea_bass.n.01", 'n', &["sea_bass", "bass"], "the lean flesh of a saltwater fish of the family Serranidae"),
    ("freshwater_bass.n.01", 'n', &["freshwater_bass", "bass"], "any of various North American freshwater fish with lean flesh (especially of the genus Micropterus)"),
    ("bass.n.06", 'n', &["bass", "bass_voice", "basso"], "the lowest adult male singing voice"),
    ("bass.n.07", 'n', &["bass"], "the member with the lowest range of a family of musical instruments"),
    ("bass.n.08", 'n', &["bass"], "nontechnical name for any of numerous edible marine and freshwater spiny-finned fishes"),
    ("bass.s.01", 's', &["bass", "deep"], "having or denoting a low vocal or instrumental range"),
    // ===== MÚSICA =====
    ("player.n.01", 'n', &["player", "participant"], "a person who participates in or is skilled at some game"),
    ("musician.n.01", 'n', &["musician", "instrumentalist", "player"], "someone who plays a musical instrument (as a profession)"),
    ("player.n.03", 'n', &["player"], "a person who pursues a number of different social and sexual partners simultaneously"),
    ("actor.n.01", 'n', &["actor", "histrion", "player", "thespian", "role_player"], "a theatrical performer"),
    ("amplifier.n.01", 'n', &["amplifier"], "electronic equipment that increases strength of signals passing through it"),
    ("adjust.v.01", 'v', &["adjust", "conform", "adapt"], "adapt or conform oneself to new or different conditions"),
    ("adjust.v.02", 'v', &["adjust", "set", "correct"], "alter or regulate so as to achieve accuracy or conform to a standard"),
    ("align.v.01", 'v', &["align", "aline", "line_up", "adjust"], "place in a line or arrange so as to be parallel or straight"),
    // ===== PESCA =====
    ("fish.n.01", 'n', &["fish"], "any of various mostly cold-blooded aquatic vertebrates usually having scales and breathing through gills"),
    ("fish.n.02", 'n', &["fish"], "the flesh of fish used as food"),
    ("fish.v.01", 'v', &["fish"], "seek indirectly"),
    ("fish.v.02", 'v', &["fish", "angle"], "catch or try to catch fish or shellfish"),
    ("fishing.n.01", 'n', &["fishing", "sportfishing"], "the act of someone who fishes as a diversion"),
    ("fishing.n.02", 'n', &["fishing", "fishery"], "the occupation of catching fish for a living"),
    // ===== DINHEIRO / MOVIMENTO =====
    ("money.n.01", 'n', &["money"], "the most common medium of exchange; functions as legal tender"),
    ("money.n.02", 'n', &["money"], "wealth reckoned in terms of money"),
    ("money.n.03", 'n', &["money"], "the official currency issued by a government or national bank"),
    ("deposit.n.01", 'n', &["deposit", "sedimentation"], "the phenomenon of sediment or gravel accumulating"),
    ("deposit.n.02", 'n', &["deposit", "bank_deposit"], "money deposited in a bank or some similar institution"),
    ("travel.v.01", 'v', &["travel", "go", "move", "locomote"], "change location; move, travel, or proceed, also metaphorically"),
    ("go.v.02", 'v', &["go", "proceed", "move"], "follow a procedure or take a course"),
    ("go.v.03", 'v', &["go", "go_away", "depart"], "move away from a place into another direction"),
    ("become.v.01", 'v', &["become", "go", "get"], "enter or assume a certain state or condition"),
    ("fall.v.01", 'v', &["fall"], "descend in free fall under the influence of gravity"),
    ("fall.v.02", 'v', &["fall", "descend", "go_down", "come_down"], "move downward and lower, but not necessarily all the way"),
    ("fall.v.03", 'v', &["fall"], "pass suddenly and passively into a state of body or mind"),
    ("fall.n.01", 'n', &["fall", "autumn"], "the season when the leaves fall from the trees"),
    // ===== AMOR =====
    ("love.n.01", 'n', &["love"], "a strong positive emotion of regard and affection"),
    ("love.n.02", 'n', &["love"], "any object of warm affection or devotion"),
    ("beloved.n.01", 'n', &["beloved", "dear", "dearest", "honey", "love"], "a beloved person; used as terms of endearment"),
    ("love.n.04", 'n', &["love", "sexual_love", "erotic_love"], "a deep feeling of sexual desire and attraction"),
    ("love.n.05", 'n', &["love"], "a score of zero in tennis or squash"),
    ("love.v.01", 'v', &["love"], "have a great affection or liking for"),
    ("love.v.02", 'v', &["love"], "get pleasure from"),
    ("love.v.03", 'v', &["love", "be_intimate"], "be enamored or in love with"),
    // ===== RIO / NATUREZA =====
    ("river.n.01", 'n', &["river"], "a large natural stream of water (larger than a creek)"),
    ("water.n.01", 'n', &["water", "H2O"], "binary compound that occurs at room temperature as a clear colorless odorless tasteless liquid"),
    ("body_of_water.n.01", 'n', &["body_of_water", "water"], "the part of the earth's surface covered with water (such as a river or lake or ocean)"),
    ("water.v.01", 'v', &["water"], "supply with water, as with channels or ditches or streams"),
    ("water.v.02", 'v', &["water"], "provide with water"),
    ("sit.v.01", 'v', &["sit", "sit_down"], "be seated"),
    ("sit.v.02", 'v', &["sit"], "be around, often idly or without specific purpose"),
    ("watch.v.01", 'v', &["watch", "look_on"], "look attentively"),
    ("watch.v.02", 'v', &["watch"], "follow with the eyes or the mind"),
    ("watch.n.01", 'n', &["watch", "ticker"], "a small portable timepiece"),
    ("plant.n.01", 'n', &["plant", "works", "industrial_plant"], "buildings for carrying on industrial labor"),
    ("plant.n.02", 'n', &["plant", "flora", "plant_life"], "(botany) a living organism lacking the power of locomotion"),
    ("plant.v.01", 'v', &["plant", "set"], "put or set (seeds, seedlings, or plants) into the ground"),
    ("worker.n.01", 'n', &["worker"], "a person who works at a specific occupation"),
    ("leaf.n.01", 'n', &["leaf", "leafage", "foliage"], "the main organ of photosynthesis and transpiration in higher plants"),
    ("leave.v.01", 'v', &["leave", "go_forth", "go_away"], "go forth, leave"),
    ("meet.v.01", 'v', &["meet", "run_into", "encounter"], "come together"),
    // ===== ADJETIVOS / ADVÉRBIOS =====
    ("low.a.01", 'a', &["low"], "less than normal in degree or intensity or amount"),
    ("low.a.02", 'a', &["low"], "literal meanings; being at or having a relatively small elevation or upward extension"),
    ("low.s.03", 's', &["low", "low-pitched"], "very low in volume"),
    ("green.s.01", 's', &["green", "greenish", "light-green", "dark-green"], "of the color between blue and yellow in the color spectrum; similar to the color of fresh grass"),
    ("quickly.r.01", 'r', &["quickly", "rapidly", "speedily", "chop-chop", "apace"], "with rapid movements"),
    ("quickly.r.02", 'r', &["promptly", "quickly", "quick"], "with little or no delay"),
];

/// Formas irregulares: `(pos, forma flexionada, forma base)`.
const EXCEPTIONS: &[(char, &str, &str)] = &[
    ('v', "went", "go"),
    ('v', "gone", "go"),
    ('v', "fell", "fall"),
    ('v', "fallen", "fall"),
    // a regra de consoante dobrada reduz "falling" a "fal"
    ('v', "falling", "fall"),
    ('v', "sat", "sit"),
    ('v', "met", "meet"),
    ('v', "left", "leave"),
    ('n', "men", "man"),
    ('n', "leaves", "leaf"),
    ('a', "lower", "low"),
    ('a', "lowest", "low"),
];

impl WordNet {
    /// Constrói o banco a partir do léxico embutido.
    pub fn builtin() -> Self {
        let mut wordnet = WordNet::new();
        for (id, letter, lemmas, gloss) in SYNSETS {
            let Some(pos) = WordNetPos::from_letter(*letter) else { continue };
            wordnet.insert(SenseCandidate {
                id: id.to_string(),
                pos,
                gloss: gloss.to_string(),
                lemmas: lemmas.iter().map(|l| l.to_string()).collect(),
                examples: vec![],
            });
        }
        for (letter, inflected, base) in EXCEPTIONS {
            if let Some(pos) = WordNetPos::from_letter(*letter) {
                wordnet.insert_exception(pos, inflected, base);
            }
        }
        wordnet
    }
}

/// Frases de demonstração, agrupadas por tema: `(tema, texto)`.
pub fn demo_texts() -> Vec<(&'static str, &'static str)> {
    vec![
        ("banco", "He went to the bank to deposit money after falling in love."),
        ("baixo", "The bass player adjusted the bass on his amplifier while fishing for bass."),
        ("rio", "They sat on the bank of the river and watched the water."),
        ("planta", "The plant workers watered the leaves of every plant."),
    ]
}
