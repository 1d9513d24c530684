pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #7C4A1E;          /* walnut */
  --primary-light: #A0693A;
  --primary-dark: #5A3413;
  --accent: #C9A227;           /* brass fittings */

  /* Neutrals */
  --neutral-50: #FAF8F5;
  --neutral-100: #F3EFE9;
  --neutral-200: #E6DFD5;
  --neutral-300: #D3C8B8;
  --neutral-400: #A99C89;
  --neutral-500: #7F7362;
  --neutral-600: #5E5446;
  --neutral-700: #433B30;
  --neutral-800: #2B251E;
  --neutral-900: #1A1612;

  /* Semantic Colors */
  --success: #2F855A;
  --warning: #B7791F;
  --error: #C53030;

  /* Status badges */
  --status-available: var(--success);
  --status-upcoming: var(--warning);
  --status-sold: var(--neutral-500);

  /* Background and Surface Colors */
  --background: var(--neutral-100);
  --surface: #FFFFFF;

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-500);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: var(--neutral-200);

  /* Layout */
  --header-height: 64px;
  --sidebar-width: 260px;
  --container-width: 1280px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 250ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
