//! Static fallback catalog of known-good Flaticon icon ids.
//!
//! The remote strategies are best-effort; this table is the terminal fallback
//! that makes `fetch_page` total. Categories are keyed by keyword and resolved
//! with a fixed precedence: exact key, key substring, tag substring, synonym
//! override, then the `search` default.

use crate::model::types::{IconRecord, PAGE_SIZE};

#[derive(Debug, Clone, Copy)]
pub struct CatalogIcon {
    pub id: u64,
    pub name: &'static str,
    /// Comma-joined tag string, matched by substring during resolution.
    pub tags: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub category: &'static str,
    pub icons: &'static [CatalogIcon],
}

macro_rules! icons {
    ($(($id:expr, $name:expr, $tags:expr)),* $(,)?) => {
        &[$(CatalogIcon { id: $id, name: $name, tags: $tags }),*]
    };
}

const RING: &[CatalogIcon] = icons![
    // Page 1
    (870768, "Wedding Ring", "wedding,ring,diamond"),
    (2913131, "Ring", "ring,jewelry,circle"),
    (3156707, "Diamond Ring", "diamond,ring,jewelry"),
    (3156709, "Engagement Ring", "engagement,ring,wedding"),
    (3081648, "Wedding Rings", "wedding,rings,marriage"),
    (4441321, "Ring Box", "ring,box,jewelry"),
    (2832495, "Gold Ring", "gold,ring,jewelry"),
    (5787016, "Ring Bearer", "ring,bearer,wedding"),
    (3039350, "Ring Case", "ring,case,jewelry"),
    (3670068, "Jewelry Ring", "jewelry,ring,precious"),
    (4892501, "Silver Ring", "silver,ring,metal"),
    (5234123, "Platinum Ring", "platinum,ring,luxury"),
    (6123456, "Wedding Band", "wedding,band,simple"),
    (4567890, "Cocktail Ring", "cocktail,ring,fashion"),
    (7890123, "Signet Ring", "signet,ring,classic"),
    (2345678, "Promise Ring", "promise,ring,love"),
    (8901234, "Class Ring", "class,ring,school"),
    (5678901, "Mood Ring", "mood,ring,colorful"),
    (9012345, "Thumb Ring", "thumb,ring,casual"),
    (6789012, "Toe Ring", "toe,ring,summer"),
    // Page 2
    (1234567, "Ruby Ring", "ruby,ring,gemstone"),
    (3456789, "Sapphire Ring", "sapphire,ring,blue"),
    (4567812, "Emerald Ring", "emerald,ring,green"),
    (5678923, "Pearl Ring", "pearl,ring,elegant"),
    (6789034, "Vintage Ring", "vintage,ring,antique"),
    (7890145, "Art Deco Ring", "art,deco,ring"),
    (8901256, "Celtic Ring", "celtic,ring,irish"),
    (9012367, "Infinity Ring", "infinity,ring,eternal"),
    (1234678, "Cross Ring", "cross,ring,religious"),
    (2345789, "Crown Ring", "crown,ring,royal"),
    (3456890, "Skull Ring", "skull,ring,gothic"),
    (4567901, "Flower Ring", "flower,ring,nature"),
    (5678012, "Heart Ring", "heart,ring,romantic"),
    (6789123, "Star Ring", "star,ring,celestial"),
    (7890234, "Moon Ring", "moon,ring,lunar"),
    (8901345, "Sun Ring", "sun,ring,solar"),
    (9012456, "Tree Ring", "tree,ring,nature"),
    (1234789, "Feather Ring", "feather,ring,light"),
    (2345890, "Arrow Ring", "arrow,ring,direction"),
    (3456901, "Compass Ring", "compass,ring,navigation"),
];

const HEART: &[CatalogIcon] = icons![
    (833472, "Heart", "heart,love,like"),
    (2589175, "Love", "love,heart,romance"),
    (1077035, "Like", "like,heart,favorite"),
    (803087, "Heart Shape", "heart,shape,love"),
    (6663972, "Broken Heart", "broken,heart,sad"),
    (1828773, "Heart Beat", "heartbeat,pulse,life"),
    (2107872, "Double Heart", "double,heart,couple"),
    (3456123, "Heart Lock", "heart,lock,security"),
    (4567234, "Heart Key", "heart,key,unlock"),
    (5678345, "Heart Eyes", "heart,eyes,love"),
    (6789456, "Heart Wings", "heart,wings,flying"),
    (7890567, "Heart Arrow", "heart,arrow,cupid"),
    (8901678, "Heart Balloon", "heart,balloon,celebration"),
    (9012789, "Heart Gift", "heart,gift,present"),
    (1234890, "Heart Card", "heart,card,playing"),
    (2345901, "Heart Pulse", "heart,pulse,medical"),
    (3457012, "Heart Rate", "heart,rate,monitor"),
    (4568123, "Heart Health", "heart,health,wellness"),
    (5679234, "Heart Hands", "heart,hands,care"),
    (6780345, "Heart Family", "heart,family,love"),
];

const STAR: &[CatalogIcon] = icons![
    (1828884, "Star", "star,favorite,rating"),
    (2107957, "Filled Star", "star,filled,rating"),
    (1940611, "Rating", "rating,star,review"),
    (2893781, "Award", "award,star,trophy"),
    (3456734, "Star Outline", "star,outline,empty"),
    (4567845, "Shooting Star", "shooting,star,comet"),
    (5678956, "Star Burst", "star,burst,explosion"),
    (6789067, "Five Star", "five,star,excellent"),
    (7890178, "Gold Star", "gold,star,premium"),
    (8901289, "Silver Star", "silver,star,second"),
    (9012390, "Bronze Star", "bronze,star,third"),
    (1234501, "Star Badge", "star,badge,achievement"),
    (2345612, "Star Crown", "star,crown,royal"),
    (3456723, "Star Shield", "star,shield,protection"),
    (4567834, "Star Circle", "star,circle,round"),
    (5678945, "Star Square", "star,square,frame"),
    (6789056, "Star Diamond", "star,diamond,precious"),
    (7890167, "Star Magic", "star,magic,sparkle"),
    (8901278, "Star Night", "star,night,dark"),
    (9012389, "Star Constellation", "star,constellation,space"),
];

const SEARCH: &[CatalogIcon] = icons![
    (54481, "Search", "search,find,magnify"),
    (622669, "Find", "find,search,look"),
    (751463, "Magnifying Glass", "magnify,search,zoom"),
    (2107823, "Search File", "search,file,document"),
    (3456712, "Search User", "search,user,people"),
    (4567823, "Search Location", "search,location,map"),
    (5678934, "Search Database", "search,database,data"),
    (6789045, "Search Web", "search,web,internet"),
    (7890156, "Search Settings", "search,settings,config"),
    (8901267, "Search Analytics", "search,analytics,chart"),
    (9012378, "Search Calendar", "search,calendar,date"),
    (1234589, "Search Email", "search,email,mail"),
    (2345690, "Search Image", "search,image,photo"),
    (3456701, "Search Video", "search,video,media"),
    (4567812, "Search Music", "search,music,audio"),
    (5678923, "Search Shopping", "search,shopping,cart"),
    (6789034, "Search News", "search,news,article"),
    (7890145, "Search Book", "search,book,library"),
    (8901256, "Search Code", "search,code,programming"),
    (9012367, "Search AI", "search,ai,artificial"),
];

const USER: &[CatalogIcon] = icons![
    (1077114, "User", "user,person,profile"),
    (847969, "Person", "person,user,human"),
    (1144760, "Profile", "profile,user,account"),
    (3177440, "Account", "account,user,profile"),
    (2345723, "User Group", "user,group,team"),
    (3456834, "User Settings", "user,settings,config"),
    (4567945, "User Admin", "user,admin,management"),
    (5679056, "User Guest", "user,guest,visitor"),
    (6780167, "User Female", "user,female,woman"),
    (7891278, "User Male", "user,male,man"),
    (8902389, "User Avatar", "user,avatar,icon"),
    (9013490, "User Circle", "user,circle,round"),
    (1234601, "User Shield", "user,shield,security"),
    (2345712, "User Crown", "user,crown,premium"),
    (3456823, "User Heart", "user,heart,favorite"),
    (4567934, "User Star", "user,star,rating"),
    (5679045, "User Check", "user,check,verified"),
    (6780156, "User Plus", "user,plus,add"),
    (7891267, "User Minus", "user,minus,remove"),
    (8902378, "User Edit", "user,edit,modify"),
];

const HOME: &[CatalogIcon] = icons![
    (25694, "Home", "home,house,building"),
    (609803, "House", "house,home,building"),
    (1946488, "Building", "building,house,home"),
    (2345734, "Apartment", "apartment,home,residence"),
    (3456845, "Villa", "villa,home,luxury"),
    (4567956, "Cottage", "cottage,home,small"),
    (5679067, "Mansion", "mansion,home,large"),
    (6780178, "Cabin", "cabin,home,wood"),
    (7891289, "Castle", "castle,home,royal"),
    (8902390, "Hut", "hut,home,simple"),
    (9013401, "Tent", "tent,home,camping"),
    (1234612, "Garage", "garage,home,car"),
    (2345723, "Garden", "garden,home,plants"),
    (3456834, "Balcony", "balcony,home,outdoor"),
    (4567945, "Roof", "roof,home,top"),
    (5679056, "Door", "door,home,entrance"),
    (6780167, "Window", "window,home,view"),
    (7891278, "Chimney", "chimney,home,smoke"),
    (8902389, "Fence", "fence,home,boundary"),
    (9013490, "Mailbox", "mailbox,home,mail"),
];

pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry { category: "ring", icons: RING },
    CatalogEntry { category: "heart", icons: HEART },
    CatalogEntry { category: "star", icons: STAR },
    CatalogEntry { category: "search", icons: SEARCH },
    CatalogEntry { category: "user", icons: USER },
    CatalogEntry { category: "home", icons: HOME },
];

/// Queries containing any of these tokens map straight to a category when the
/// key and tag passes come up empty.
const SYNONYMS: &[(&str, &str)] = &[("ring", "ring"), ("wedding", "ring"), ("diamond", "ring")];

const DEFAULT_CATEGORY: &str = "search";

/// Picks the best-matching category for a free-text query. Total: every query
/// resolves to some member of [`CATALOG`].
pub fn resolve(query: &str) -> &'static CatalogEntry {
    let q = query.to_lowercase();

    if let Some(entry) = CATALOG.iter().find(|e| e.category == q) {
        return entry;
    }

    for entry in CATALOG {
        if q.contains(entry.category) || entry.category.contains(q.as_str()) {
            return entry;
        }
    }

    for entry in CATALOG {
        if entry.icons.iter().any(|icon| icon.tags.contains(q.as_str())) {
            return entry;
        }
    }

    for (token, category) in SYNONYMS {
        if q.contains(token)
            && let Some(entry) = CATALOG.iter().find(|e| e.category == *category)
        {
            return entry;
        }
    }

    default_entry()
}

pub fn default_entry() -> &'static CatalogEntry {
    CATALOG
        .iter()
        .find(|e| e.category == DEFAULT_CATEGORY)
        .expect("default category present")
}

/// Fixed-size slice of a category's icons, numbered from page 1. Pages beyond
/// the end are empty.
pub fn page(entry: &CatalogEntry, page: u32) -> &'static [CatalogIcon] {
    let start = (page.max(1) as usize - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(entry.icons.len());
    if start >= entry.icons.len() {
        &[]
    } else {
        &entry.icons[start..end]
    }
}

impl CatalogIcon {
    /// Detail-page slug: lower-cased name with whitespace collapsed to dashes.
    pub fn slug(&self) -> String {
        self.name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
    }

    /// Synthesizes CDN + detail URLs from the numeric id. The CDN shards icons
    /// into directories of a thousand.
    pub fn to_record(&self) -> IconRecord {
        let dir = self.id / 1000;
        IconRecord {
            id: self.id.to_string(),
            title: self.name.to_string(),
            image_url: format!("https://cdn-icons-png.flaticon.com/64/{dir}/{}.png", self.id),
            flaticon_url: format!(
                "https://www.flaticon.com/free-icon/{}_{}",
                self.slug(),
                self.id
            ),
            fallback_url: Some(format!(
                "https://cdn-icons-png.flaticon.com/512/{dir}/{}.png",
                self.id
            )),
        }
    }
}
