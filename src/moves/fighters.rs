// Fighter movesets shown in the site's move-list modal.
// Roster subset only; fighters missing here fall back to the generic panel.
use super::{CharacterMoveset, MoveEntry};

pub static FIGHTERS: [(&str, CharacterMoveset); 18] = [
    (
        "mario",
        CharacterMoveset {
            display_name: "Mario",
            description: "The all-rounder plumber with balanced attacks",
            special_moves: &[
                MoveEntry::new("🔥", "Fireball", "Projectile attack"),
                MoveEntry::new("🍄", "Super Jump Punch", "Anti-air attack"),
                MoveEntry::new("💨", "Cape", "Reflects projectiles"),
                MoveEntry::new("💧", "F.L.U.D.D.", "Water spray pushback"),
                MoveEntry::new("⭐", "Super Star", "Final Smash invincibility"),
            ],
            combo_suggestions: &[
                "Up-tilt → Up-air → Up-air",
                "Down-throw → Forward-air",
                "Fireball → Forward-smash",
            ],
        },
    ),
    (
        "sonic",
        CharacterMoveset {
            display_name: "Sonic",
            description: "The speedster with rapid combos and mobility",
            special_moves: &[
                MoveEntry::new("💨", "Sonic Boom", "Speed dash attack"),
                MoveEntry::new("🌪️", "Spin Dash", "Rolling attack"),
                MoveEntry::new("⚡", "Homing Attack", "Targeted aerial strike"),
                MoveEntry::new("🏃", "Boost", "Speed increase buff"),
                MoveEntry::new("💫", "Super Sonic", "Final Smash transformation"),
            ],
            combo_suggestions: &[
                "Homing Attack → Forward-air → Back-air",
                "Spin Dash → Up-smash",
                "Down-air → Down-air → Special",
            ],
        },
    ),
    (
        "sans",
        CharacterMoveset {
            display_name: "Sans",
            description: "Low HP, high chaos with unique mechanics",
            special_moves: &[
                MoveEntry::new("💀", "Gaster Blaster", "Laser beam"),
                MoveEntry::new("🦴", "Bone Attack", "Ground spikes"),
                MoveEntry::new("💙", "Blue Soul", "Gravity manipulation"),
                MoveEntry::new("😴", "Sleep", "Dodge with nap"),
                MoveEntry::new("⚰️", "Dunked On", "Final Smash judgment"),
            ],
            combo_suggestions: &[
                "Bone → Bone → Gaster Blaster",
                "Blue Soul → Bone combo",
                "Sleep dodge → Counter attack",
            ],
        },
    ),
    (
        "steve",
        CharacterMoveset {
            display_name: "Steve",
            description: "Crafty moves from the blocky world",
            special_moves: &[
                MoveEntry::new("⛏️", "Mine", "Gather resources"),
                MoveEntry::new("🔨", "Build", "Create block platforms"),
                MoveEntry::new("🏹", "Bow", "Ranged arrow attack"),
                MoveEntry::new("🗡️", "Diamond Sword", "Powerful melee"),
                MoveEntry::new("💎", "Diamond Armor", "Final Smash defense"),
            ],
            combo_suggestions: &[
                "Mine → Build → Down-air",
                "Arrow → Forward-smash",
                "Block trap → Diamond Sword",
            ],
        },
    ),
    (
        "shaggy",
        CharacterMoveset {
            display_name: "Shaggy",
            description: "Ultra Instinct? You bet.",
            special_moves: &[
                MoveEntry::new("🌟", "Ultra Instinct", "Auto-dodge mode"),
                MoveEntry::new("👊", "Shaggy Punch", "Devastating blow"),
                MoveEntry::new("🥪", "Scooby Snack", "Health restore"),
                MoveEntry::new("😱", "Zoinks!", "Fear-based attack"),
                MoveEntry::new("🌌", "100% Power", "Final Smash transformation"),
            ],
            combo_suggestions: &[
                "Ultra Instinct → Punch combo",
                "Zoinks! → Forward-air spam",
                "Snack → Power mode activation",
            ],
        },
    ),
    (
        "cuphead",
        CharacterMoveset {
            display_name: "Cuphead",
            description: "Run and gun cartoon style fighter",
            special_moves: &[
                MoveEntry::new("☕", "Finger Gun", "Rapid fire"),
                MoveEntry::new("🎯", "Charge Shot", "Powered projectile"),
                MoveEntry::new("💨", "Dash", "Quick movement"),
                MoveEntry::new("🛡️", "Parry", "Counter pink attacks"),
                MoveEntry::new("👹", "Devil's Contract", "Final Smash"),
            ],
            combo_suggestions: &[
                "Finger Gun → Dash → Charge Shot",
                "Parry → Counter combo",
                "Air dash → Down-air",
            ],
        },
    ),
    (
        "kirby",
        CharacterMoveset {
            display_name: "Kirby",
            description: "The pink puffball of power",
            special_moves: &[
                MoveEntry::new("💨", "Inhale", "Copy enemy abilities"),
                MoveEntry::new("🔨", "Hammer", "Powerful ground slam"),
                MoveEntry::new("⭐", "Star Spit", "Projectile attack"),
                MoveEntry::new("🌪️", "Final Cutter", "Sword wave"),
                MoveEntry::new("🍳", "Cook", "Final Smash cooking pot"),
            ],
            combo_suggestions: &[
                "Inhale → Star Spit",
                "Hammer → Down-air",
                "Final Cutter → Forward-smash",
            ],
        },
    ),
    (
        "naruto",
        CharacterMoveset {
            display_name: "Naruto",
            description: "Ninja techniques and jutsu master",
            special_moves: &[
                MoveEntry::new("🍃", "Shadow Clone", "Create duplicates"),
                MoveEntry::new("🌀", "Rasengan", "Spinning energy attack"),
                MoveEntry::new("🦊", "Nine-Tails Chakra", "Power boost"),
                MoveEntry::new("🏃", "Ninja Run", "Enhanced mobility"),
                MoveEntry::new("🌟", "Sage Mode", "Final Smash transformation"),
            ],
            combo_suggestions: &[
                "Shadow Clone → Rasengan",
                "Ninja Run → Forward-air",
                "Nine-Tails → Combo extension",
            ],
        },
    ),
    (
        "goku",
        CharacterMoveset {
            display_name: "Goku",
            description: "Saiyan warrior with devastating power",
            special_moves: &[
                MoveEntry::new("🌊", "Kamehameha", "Energy beam"),
                MoveEntry::new("👊", "Dragon Fist", "Rushing punch"),
                MoveEntry::new("⚡", "Instant Transmission", "Teleport"),
                MoveEntry::new("💪", "Super Saiyan", "Power transformation"),
                MoveEntry::new("🐲", "Spirit Bomb", "Final Smash ultimate"),
            ],
            combo_suggestions: &[
                "Dragon Fist → Kamehameha",
                "Instant Transmission → Combo starter",
                "Super Saiyan → Enhanced attacks",
            ],
        },
    ),
    (
        "pikachu",
        CharacterMoveset {
            display_name: "Pikachu",
            description: "Electric mouse with shocking attacks",
            special_moves: &[
                MoveEntry::new("⚡", "Thunderbolt", "Electric projectile"),
                MoveEntry::new("💥", "Thunder", "Lightning from above"),
                MoveEntry::new("🏃", "Quick Attack", "Swift movement"),
                MoveEntry::new("⭐", "Thunder Wave", "Paralysis attack"),
                MoveEntry::new("🌩️", "Volt Tackle", "Final Smash rush"),
            ],
            combo_suggestions: &[
                "Thunder Wave → Thunder",
                "Quick Attack → Back-air",
                "Thunderbolt → Forward-smash",
            ],
        },
    ),
    (
        "link",
        CharacterMoveset {
            display_name: "Link",
            description: "Hero of Hyrule with legendary weapons",
            special_moves: &[
                MoveEntry::new("🏹", "Bow", "Precise arrow shots"),
                MoveEntry::new("💣", "Bomb", "Explosive projectile"),
                MoveEntry::new("🗡️", "Master Sword", "Sacred blade"),
                MoveEntry::new("🛡️", "Hylian Shield", "Defensive stance"),
                MoveEntry::new("⚡", "Triforce Slash", "Final Smash combo"),
            ],
            combo_suggestions: &[
                "Bomb → Forward-air",
                "Bow → Master Sword combo",
                "Shield → Counter attack",
            ],
        },
    ),
    (
        "megaman",
        CharacterMoveset {
            display_name: "Megaman",
            description: "Robot master with copied abilities",
            special_moves: &[
                MoveEntry::new("🔫", "Mega Buster", "Charged shots"),
                MoveEntry::new("🔥", "Fire Storm", "Flame projectiles"),
                MoveEntry::new("⚡", "Thunder Beam", "Electric attack"),
                MoveEntry::new("🧊", "Ice Slasher", "Freezing projectile"),
                MoveEntry::new("💥", "Rush Coil", "Final Smash support"),
            ],
            combo_suggestions: &[
                "Mega Buster → Fire Storm",
                "Ice Slasher → Thunder Beam",
                "Rush Coil → Aerial combo",
            ],
        },
    ),
    (
        "scratch-cat",
        CharacterMoveset {
            display_name: "Scratch Cat",
            description: "Programming mascot with coding powers",
            special_moves: &[
                MoveEntry::new("💻", "Code Block", "Programming attack"),
                MoveEntry::new("🎨", "Sprite Change", "Transform ability"),
                MoveEntry::new("🔄", "Loop", "Repeating actions"),
                MoveEntry::new("📢", "Broadcast", "Communication wave"),
                MoveEntry::new("🎮", "Game Over", "Final Smash debug"),
            ],
            combo_suggestions: &[
                "Code Block → Loop combo",
                "Sprite Change → Broadcast",
                "Loop → Infinite combo potential",
            ],
        },
    ),
    (
        "impostor",
        CharacterMoveset {
            display_name: "Impostor",
            description: "Sus crewmate with deceptive abilities",
            special_moves: &[
                MoveEntry::new("🔪", "Sabotage", "Disable enemy abilities"),
                MoveEntry::new("👤", "Shapeshift", "Mimic appearance"),
                MoveEntry::new("🚨", "Emergency", "Area damage"),
                MoveEntry::new("🕳️", "Vent", "Quick escape/attack"),
                MoveEntry::new("📱", "Sus Vote", "Final Smash ejection"),
            ],
            combo_suggestions: &[
                "Sabotage → Shapeshift",
                "Vent → Emergency attack",
                "Shapeshift → Backstab combo",
            ],
        },
    ),
    (
        "ness",
        CharacterMoveset {
            display_name: "Ness",
            description: "PSI powered psychic fighter",
            special_moves: &[
                MoveEntry::new("🔮", "PK Thunder", "Electric projectile"),
                MoveEntry::new("🔥", "PK Fire", "Flame pillar"),
                MoveEntry::new("💫", "PSI Magnet", "Absorb energy"),
                MoveEntry::new("🌟", "PK Flash", "Delayed explosion"),
                MoveEntry::new("🌍", "PK Rockin", "Final Smash wave"),
            ],
            combo_suggestions: &[
                "PK Fire → Forward-air",
                "PK Thunder → Recovery combo",
                "PSI Magnet → PK Flash",
            ],
        },
    ),
    (
        "hat-kid",
        CharacterMoveset {
            display_name: "Hat Kid",
            description: "Time-bending adventurer with magical hats",
            special_moves: &[
                MoveEntry::new("🎩", "Hat Throw", "Boomerang attack"),
                MoveEntry::new("⏰", "Time Stop", "Freeze enemies"),
                MoveEntry::new("👻", "Dweller Mask", "Phase through"),
                MoveEntry::new("🏃", "Sprint Hat", "Enhanced speed"),
                MoveEntry::new("🌟", "Time Rift", "Final Smash chaos"),
            ],
            combo_suggestions: &[
                "Time Stop → Hat Throw",
                "Sprint Hat → Aerial combo",
                "Dweller Mask → Phase attack",
            ],
        },
    ),
    (
        "sora",
        CharacterMoveset {
            display_name: "Sora",
            description: "Keyblade master from Kingdom Hearts",
            special_moves: &[
                MoveEntry::new("🔑", "Keyblade Combo", "Multi-hit attack"),
                MoveEntry::new("✨", "Magic Spells", "Elemental attacks"),
                MoveEntry::new("🌟", "Drive Form", "Transformation"),
                MoveEntry::new("💫", "Flowmotion", "Enhanced mobility"),
                MoveEntry::new("👑", "Ultimate Form", "Final Smash power"),
            ],
            combo_suggestions: &[
                "Keyblade → Magic combo",
                "Flowmotion → Aerial strikes",
                "Drive Form → Enhanced attacks",
            ],
        },
    ),
    (
        "reimu",
        CharacterMoveset {
            display_name: "Reimu",
            description: "Shrine maiden with spiritual powers",
            special_moves: &[
                MoveEntry::new("🎴", "Ofuda", "Paper talisman projectiles"),
                MoveEntry::new("🌙", "Yin-Yang Orb", "Floating attack"),
                MoveEntry::new("⭐", "Spirit Sign", "Bullet pattern"),
                MoveEntry::new("🛡️", "Fantasy Seal", "Protective barrier"),
                MoveEntry::new("🌸", "Fantasy Heaven", "Final Smash spellcard"),
            ],
            combo_suggestions: &[
                "Ofuda → Yin-Yang combo",
                "Spirit Sign → Fantasy Seal",
                "Bullet pattern → Aerial follow-up",
            ],
        },
    ),
];
