//! 翻訳テーブル（言語ごとの キー → 文字列）

type Table = &'static [(&'static str, &'static str)];

const EN: Table = &[
    ("appTitle", "AI Content Studio"),
    ("appDescription", "Summarize, write, and cook with Gemini"),
    ("footerPoweredBy", "Powered by Google Gemini"),
    ("summarizeTextTab", "Summarize Text"),
    ("summarizeVideoTab", "Summarize Video"),
    ("writeStoryTab", "Write Story"),
    ("createRecipeTab", "Create Recipe"),
    ("textSummarizerTitle", "Text Summarizer"),
    ("textSummarizerPlaceholder", "Paste the text you want to summarize here..."),
    ("summarizeTextButton", "Summarize Text"),
    ("videoSummarizerTitle", "Video Transcript Summarizer"),
    ("videoSummarizerPlaceholder", "Paste the video transcript here..."),
    ("summarizeVideoButton", "Summarize Transcript"),
    ("storyWriterTitle", "Story Writer"),
    ("storyWriterPlaceholder", "Describe your story idea..."),
    ("writeStoryButton", "Write Story"),
    ("recipeCreatorTitle", "Recipe Creator"),
    ("createRecipeButton", "Create Recipe"),
    ("summaryOutputPlaceholder", "Your summary will appear here."),
    ("storyOutputPlaceholder", "Your story will appear here."),
    ("recipeOutputPlaceholder", "Your recipe will appear here."),
    ("analyzingContentLoading", "Analyzing content..."),
    ("analyzingTranscriptLoading", "Analyzing transcript..."),
    ("writingStoryLoading", "Writing your story..."),
    ("creatingRecipeLoading", "Creating your recipe..."),
    ("generatingButton", "Generating..."),
    ("errorTitle", "An Error Occurred"),
    ("ingredientsLabel", "Ingredients"),
    ("ingredientsPlaceholder", "e.g. chicken, rice, broccoli"),
    ("toolsLabel", "Appliances & Tools"),
    ("toolsPlaceholder", "e.g. oven, blender"),
    ("timeLabel", "Max Time"),
    ("timePlaceholder", "e.g. 30 minutes"),
    ("skillLabel", "Skill Level"),
    ("skillBeginner", "Beginner"),
    ("skillIntermediate", "Intermediate"),
    ("skillAdvanced", "Advanced"),
];

const ES: Table = &[
    ("appTitle", "AI Content Studio"),
    ("appDescription", "Resume, escribe y cocina con Gemini"),
    ("footerPoweredBy", "Con la tecnología de Google Gemini"),
    ("summarizeTextTab", "Resumir texto"),
    ("summarizeVideoTab", "Resumir video"),
    ("writeStoryTab", "Escribir historia"),
    ("createRecipeTab", "Crear receta"),
    ("textSummarizerTitle", "Resumidor de texto"),
    ("textSummarizerPlaceholder", "Pega aquí el texto que quieres resumir..."),
    ("summarizeTextButton", "Resumir texto"),
    ("videoSummarizerTitle", "Resumidor de transcripciones"),
    ("videoSummarizerPlaceholder", "Pega aquí la transcripción del video..."),
    ("summarizeVideoButton", "Resumir transcripción"),
    ("storyWriterTitle", "Escritor de historias"),
    ("storyWriterPlaceholder", "Describe la idea de tu historia..."),
    ("writeStoryButton", "Escribir historia"),
    ("recipeCreatorTitle", "Creador de recetas"),
    ("createRecipeButton", "Crear receta"),
    ("summaryOutputPlaceholder", "Tu resumen aparecerá aquí."),
    ("storyOutputPlaceholder", "Tu historia aparecerá aquí."),
    ("recipeOutputPlaceholder", "Tu receta aparecerá aquí."),
    ("analyzingContentLoading", "Analizando contenido..."),
    ("analyzingTranscriptLoading", "Analizando transcripción..."),
    ("writingStoryLoading", "Escribiendo tu historia..."),
    ("creatingRecipeLoading", "Creando tu receta..."),
    ("generatingButton", "Generando..."),
    ("errorTitle", "Se produjo un error"),
    ("ingredientsLabel", "Ingredientes"),
    ("ingredientsPlaceholder", "p. ej. pollo, arroz, brócoli"),
    ("toolsLabel", "Electrodomésticos y utensilios"),
    ("toolsPlaceholder", "p. ej. horno, licuadora"),
    ("timeLabel", "Tiempo máximo"),
    ("timePlaceholder", "p. ej. 30 minutos"),
    ("skillLabel", "Nivel de habilidad"),
    ("skillBeginner", "Principiante"),
    ("skillIntermediate", "Intermedio"),
    ("skillAdvanced", "Avanzado"),
];

const FR: Table = &[
    ("appTitle", "AI Content Studio"),
    ("appDescription", "Résumez, écrivez et cuisinez avec Gemini"),
    ("footerPoweredBy", "Propulsé par Google Gemini"),
    ("summarizeTextTab", "Résumer un texte"),
    ("summarizeVideoTab", "Résumer une vidéo"),
    ("writeStoryTab", "Écrire une histoire"),
    ("createRecipeTab", "Créer une recette"),
    ("textSummarizerTitle", "Résumé de texte"),
    ("textSummarizerPlaceholder", "Collez ici le texte à résumer..."),
    ("summarizeTextButton", "Résumer le texte"),
    ("videoSummarizerTitle", "Résumé de transcription vidéo"),
    ("videoSummarizerPlaceholder", "Collez ici la transcription de la vidéo..."),
    ("summarizeVideoButton", "Résumer la transcription"),
    ("storyWriterTitle", "Écrivain d'histoires"),
    ("storyWriterPlaceholder", "Décrivez votre idée d'histoire..."),
    ("writeStoryButton", "Écrire l'histoire"),
    ("recipeCreatorTitle", "Créateur de recettes"),
    ("createRecipeButton", "Créer la recette"),
    ("summaryOutputPlaceholder", "Votre résumé apparaîtra ici."),
    ("storyOutputPlaceholder", "Votre histoire apparaîtra ici."),
    ("recipeOutputPlaceholder", "Votre recette apparaîtra ici."),
    ("analyzingContentLoading", "Analyse du contenu..."),
    ("analyzingTranscriptLoading", "Analyse de la transcription..."),
    ("writingStoryLoading", "Écriture de votre histoire..."),
    ("creatingRecipeLoading", "Création de votre recette..."),
    ("generatingButton", "Génération..."),
    ("errorTitle", "Une erreur s'est produite"),
    ("ingredientsLabel", "Ingrédients"),
    ("ingredientsPlaceholder", "ex. poulet, riz, brocoli"),
    ("toolsLabel", "Appareils et ustensiles"),
    ("toolsPlaceholder", "ex. four, mixeur"),
    ("timeLabel", "Temps maximum"),
    ("timePlaceholder", "ex. 30 minutes"),
    ("skillLabel", "Niveau"),
    ("skillBeginner", "Débutant"),
    ("skillIntermediate", "Intermédiaire"),
    ("skillAdvanced", "Avancé"),
];

const DE: Table = &[
    ("appTitle", "AI Content Studio"),
    ("appDescription", "Zusammenfassen, schreiben und kochen mit Gemini"),
    ("footerPoweredBy", "Unterstützt von Google Gemini"),
    ("summarizeTextTab", "Text zusammenfassen"),
    ("summarizeVideoTab", "Video zusammenfassen"),
    ("writeStoryTab", "Geschichte schreiben"),
    ("createRecipeTab", "Rezept erstellen"),
    ("textSummarizerTitle", "Textzusammenfassung"),
    ("textSummarizerPlaceholder", "Füge hier den Text ein, der zusammengefasst werden soll..."),
    ("summarizeTextButton", "Text zusammenfassen"),
    ("videoSummarizerTitle", "Zusammenfassung von Videotranskripten"),
    ("videoSummarizerPlaceholder", "Füge hier das Videotranskript ein..."),
    ("summarizeVideoButton", "Transkript zusammenfassen"),
    ("storyWriterTitle", "Geschichtenschreiber"),
    ("storyWriterPlaceholder", "Beschreibe deine Idee für eine Geschichte..."),
    ("writeStoryButton", "Geschichte schreiben"),
    ("recipeCreatorTitle", "Rezeptgenerator"),
    ("createRecipeButton", "Rezept erstellen"),
    ("summaryOutputPlaceholder", "Deine Zusammenfassung erscheint hier."),
    ("storyOutputPlaceholder", "Deine Geschichte erscheint hier."),
    ("recipeOutputPlaceholder", "Dein Rezept erscheint hier."),
    ("analyzingContentLoading", "Inhalt wird analysiert..."),
    ("analyzingTranscriptLoading", "Transkript wird analysiert..."),
    ("writingStoryLoading", "Deine Geschichte wird geschrieben..."),
    ("creatingRecipeLoading", "Dein Rezept wird erstellt..."),
    ("generatingButton", "Wird generiert..."),
    ("errorTitle", "Ein Fehler ist aufgetreten"),
    ("ingredientsLabel", "Zutaten"),
    ("ingredientsPlaceholder", "z. B. Hähnchen, Reis, Brokkoli"),
    ("toolsLabel", "Geräte & Werkzeuge"),
    ("toolsPlaceholder", "z. B. Ofen, Mixer"),
    ("timeLabel", "Maximale Zeit"),
    ("timePlaceholder", "z. B. 30 Minuten"),
    ("skillLabel", "Kochniveau"),
    ("skillBeginner", "Anfänger"),
    ("skillIntermediate", "Fortgeschritten"),
    ("skillAdvanced", "Profi"),
];

const JA: Table = &[
    ("appTitle", "AI Content Studio"),
    ("appDescription", "Gemini で要約・執筆・レシピ作成"),
    ("footerPoweredBy", "Powered by Google Gemini"),
    ("summarizeTextTab", "テキスト要約"),
    ("summarizeVideoTab", "動画要約"),
    ("writeStoryTab", "物語を書く"),
    ("createRecipeTab", "レシピ作成"),
    ("textSummarizerTitle", "テキスト要約"),
    ("textSummarizerPlaceholder", "要約したいテキストを貼り付けてください..."),
    ("summarizeTextButton", "テキストを要約"),
    ("videoSummarizerTitle", "動画の文字起こし要約"),
    ("videoSummarizerPlaceholder", "動画の文字起こしを貼り付けてください..."),
    ("summarizeVideoButton", "文字起こしを要約"),
    ("storyWriterTitle", "物語ライター"),
    ("storyWriterPlaceholder", "物語のアイデアを書いてください..."),
    ("writeStoryButton", "物語を書く"),
    ("recipeCreatorTitle", "レシピ作成"),
    ("createRecipeButton", "レシピを作成"),
    ("summaryOutputPlaceholder", "要約はここに表示されます。"),
    ("storyOutputPlaceholder", "物語はここに表示されます。"),
    ("recipeOutputPlaceholder", "レシピはここに表示されます。"),
    ("analyzingContentLoading", "内容を分析しています..."),
    ("analyzingTranscriptLoading", "文字起こしを分析しています..."),
    ("writingStoryLoading", "物語を書いています..."),
    ("creatingRecipeLoading", "レシピを作成しています..."),
    ("generatingButton", "生成中..."),
    ("errorTitle", "エラーが発生しました"),
    ("ingredientsLabel", "材料"),
    ("ingredientsPlaceholder", "例: 鶏肉、ご飯、ブロッコリー"),
    ("toolsLabel", "調理器具"),
    ("toolsPlaceholder", "例: オーブン、ミキサー"),
    ("timeLabel", "最大時間"),
    ("timePlaceholder", "例: 30分"),
    ("skillLabel", "料理の腕前"),
    ("skillBeginner", "初心者"),
    ("skillIntermediate", "中級者"),
    ("skillAdvanced", "上級者"),
];

const ZH: Table = &[
    ("appTitle", "AI Content Studio"),
    ("appDescription", "使用 Gemini 进行摘要、写作和烹饪"),
    ("footerPoweredBy", "由 Google Gemini 提供支持"),
    ("summarizeTextTab", "文本摘要"),
    ("summarizeVideoTab", "视频摘要"),
    ("writeStoryTab", "写故事"),
    ("createRecipeTab", "创建食谱"),
    ("textSummarizerTitle", "文本摘要"),
    ("textSummarizerPlaceholder", "在此粘贴要摘要的文本..."),
    ("summarizeTextButton", "生成文本摘要"),
    ("videoSummarizerTitle", "视频文字稿摘要"),
    ("videoSummarizerPlaceholder", "在此粘贴视频文字稿..."),
    ("summarizeVideoButton", "生成文字稿摘要"),
    ("storyWriterTitle", "故事创作"),
    ("storyWriterPlaceholder", "描述你的故事创意..."),
    ("writeStoryButton", "写故事"),
    ("recipeCreatorTitle", "食谱创建"),
    ("createRecipeButton", "创建食谱"),
    ("summaryOutputPlaceholder", "摘要将显示在这里。"),
    ("storyOutputPlaceholder", "故事将显示在这里。"),
    ("recipeOutputPlaceholder", "食谱将显示在这里。"),
    ("analyzingContentLoading", "正在分析内容..."),
    ("analyzingTranscriptLoading", "正在分析文字稿..."),
    ("writingStoryLoading", "正在撰写故事..."),
    ("creatingRecipeLoading", "正在创建食谱..."),
    ("generatingButton", "生成中..."),
    ("errorTitle", "发生错误"),
    ("ingredientsLabel", "食材"),
    ("ingredientsPlaceholder", "例如：鸡肉、米饭、西兰花"),
    ("toolsLabel", "厨具"),
    ("toolsPlaceholder", "例如：烤箱、搅拌机"),
    ("timeLabel", "最长时间"),
    ("timePlaceholder", "例如：30 分钟"),
    ("skillLabel", "烹饪水平"),
    ("skillBeginner", "初学者"),
    ("skillIntermediate", "中级"),
    ("skillAdvanced", "高级"),
];

fn table_for(code: &str) -> Option<Table> {
    match code {
        "en" => Some(EN),
        "es" => Some(ES),
        "fr" => Some(FR),
        "de" => Some(DE),
        "ja" => Some(JA),
        "zh" => Some(ZH),
        _ => None,
    }
}

pub(super) fn lookup(code: &str, key: &str) -> Option<&'static str> {
    table_for(code)?
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

#[cfg(test)]
pub(super) fn english_keys() -> impl Iterator<Item = &'static str> {
    EN.iter().map(|(k, _)| *k)
}
