//! Built-in portfolio commands.

use termfolio_types::{Image, Link, Payload, ProfileField, RichContent};

use crate::registry::{CommandEntry, CommandRegistry};

const PROJECTS: &[(&str, &str)] = &[
    ("Tamashii", "https://www.tamashii.com.br"),
    ("The North Face", "https://www.thenorthface.com.br"),
    ("Soneda", "https://www.soneda.com.br"),
    ("Coqueluche Casa", "https://www.coqueluchecasa.com.br"),
    ("Autoglas", "https://www.autoglassonline.com.br"),
    ("All parts Net", "https://www.allpartsnet.com.br"),
    ("Karcher", "https://loja.karcher.com.br"),
    ("Mormaii", "https://www.mormaiishop.com.br"),
    ("Panasonic", "https://loja.panasonic.com.br"),
    ("São Geraldo Tintas", "https://www.saogeraldotintas.com.br"),
    ("Weleda", "https://www.weleda.com.br"),
    ("Heloisa Cestone", "https://heloisacestone.com.br"),
    ("Besni", "https://besni.com.br"),
    ("Rei do Armarinho", "https://www.reidoarmarinho.com.br"),
    ("Queens Berry", "https://www.geleiasqueensberry.com.br"),
    ("Condor", "https://condor.ind.br"),
    ("Santa Prata", "https://www.santaprata.com.br"),
    ("Cristais Cá doro", "https://www.cristaiscadoro.com"),
    ("Grupo Rojemac", "https://www.gruporojemac.com.br"),
];

const SOCIAL: &[(&str, &str)] = &[
    ("Instagram", "https://www.instagram.com/cristian_hiei"),
    ("GitHub", "https://github.com/CristianR10"),
    (
        "Linkedin",
        "https://www.linkedin.com/in/cristian-renato-950183193",
    ),
    (
        "Whatsapp",
        "https://wa.me/5511942576338?text=Ol%C3%A1%2C%20como%20posso%20te%20ajudar%3F",
    ),
];

fn links(items: &[(&str, &str)]) -> Vec<Link> {
    items.iter().map(|(name, url)| Link::new(*name, *url)).collect()
}

fn field(label: &str, value: &str) -> ProfileField {
    ProfileField {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn about_me() -> RichContent {
    RichContent::Profile {
        title: "🕵️‍♂️ Cristian Renato".to_string(),
        fields: vec![
            field(
                "Missão",
                "Especialista em Front-end há 5 anos e se aventurando no Back-end, \
                 construindo experiências digitais elegantes e funcionais.",
            ),
            field(
                "Experiência",
                "Desenvolvimento de e-commerce (principalmente VTEX), Wordpress, além de \
                 projetos pessoais e experimentos criativos.",
            ),
            field(
                "Perfil",
                "Proativo, colaborativo e sempre buscando melhorar processos e elevar o \
                 nível técnico da equipe.",
            ),
            field(
                "Habilidades",
                "React, TypeScript, Next.js, SCSS, Node.js, VTEX, entre outras tecnologias \
                 modernas.",
            ),
            field(
                "Educação",
                "Faculdade Eniac (Analise e Desenvolvimento de sistemas)",
            ),
            field("Experiencia", "..."),
        ],
        motto: Some("Ajudar colegas e melhorar processos é parte da missão!".to_string()),
        image: Some(Image {
            src: "/Screenshot_19.png".to_string(),
            alt: "Cristian Renato - Ficha Secreta".to_string(),
        }),
    }
}

/// Register the portfolio commands, in listing order.
///
/// `help`, `clear` and `commands` carry no payload; the resolver handles
/// them before lookup.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(CommandEntry::new(
        "aboutme",
        "Mostra informações sobre o agente secreto",
        Some(Payload::Rich(about_me())),
    ));
    reg.register(CommandEntry::new(
        "skills",
        "Lista minhas skills",
        Some(Payload::text(
            "HTML5, SASS, LESS, JS, React, TypeScript, Next.js, Node.js, VTEX, uappi, PHP",
        )),
    ));
    reg.register(CommandEntry::new(
        "projects",
        "Mostra meus projetos",
        Some(Payload::Rich(RichContent::Links {
            items: links(PROJECTS),
        })),
    ));
    reg.register(CommandEntry::new(
        "help",
        "Mostra os comandos disponíveis",
        None,
    ));
    reg.register(CommandEntry::new("clear", "Limpa o terminal", None));
    reg.register(CommandEntry::new(
        "commands",
        "Mostra os comandos com descrição",
        None,
    ));
    reg.register(CommandEntry::new(
        "social",
        "Minhas redes Sociais",
        Some(Payload::Rich(RichContent::Contacts {
            items: links(SOCIAL),
        })),
    ));
}

/// A registry holding only the built-in commands.
pub fn builtin_registry() -> CommandRegistry {
    let mut reg = CommandRegistry::new();
    register_builtins(&mut reg);
    reg
}
