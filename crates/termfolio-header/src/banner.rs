//! ASCII-art logo and intro texts.

pub const BANNER: &str = r"
::::::::  :::::::::  :::::::::::  ::::::::  ::::::::::: :::::::::::     :::     ::::    :::
:+:    :+: :+:    :+:     :+:     :+:    :+:     :+:         :+:       :+: :+:   :+:+:   :+:
+:+        +:+    +:+     +:+     +:+            +:+         +:+      +:+   +:+  :+:+:+  +:+
#+#        +#++:++#:      +#+     +#++:++#++     +#+         +#+     +#++:++#++: +#+ +:+ +#+
#+#        +#+    +#+     +#+            +#+     +#+         +#+     +#+     +#+ +#+  +#+#+#
#+#    #+# #+#    #+#     #+#     #+#    #+#     #+#         #+#     #+#     #+# #+#   #+#+#
########  ###    ### ###########  ########      ###     ########### ###     ### ###    ####
";

pub const WELCOME: &str = " Bem vindo ao meu terminal Portfolio";
pub const INSTRUCTIONS: &str = " Digite \"help\" ou \"?\" para ver a lista de comandos";

pub const EMOJIS: [&str; 10] = [
    "😁", "🤯", "🤖", "🎃", "👹", "👾", "😺", "👨‍👩‍👧‍👦", "🐶", "🐐",
];

/// Pick an emoji from a host-supplied seed (e.g. startup time).
pub fn pick_emoji(seed: u64) -> &'static str {
    EMOJIS[(seed % EMOJIS.len() as u64) as usize]
}

/// Banner lines without the surrounding blank lines.
pub fn banner_lines() -> impl Iterator<Item = &'static str> {
    BANNER.trim_matches('\n').lines()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_has_seven_rows() {
        assert_eq!(banner_lines().count(), 7);
    }

    #[test]
    fn pick_emoji_wraps() {
        assert_eq!(pick_emoji(0), EMOJIS[0]);
        assert_eq!(pick_emoji(12), EMOJIS[2]);
    }
}
