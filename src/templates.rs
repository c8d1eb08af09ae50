use anyhow::{Context, Result};
use chrono::Datelike;
use std::path::{Path, PathBuf};

use crate::models::{Answers, InitMode, OutputFile, OutputSet, WritePolicy};

pub const GITIGNORE_FILENAME: &str = ".gitignore";
pub const MAKEFILE_FILENAME: &str = "Makefile";
pub const TEST_MAKEFILE_PATH: &str = "tests/Makefile";
pub const MAIN_FILENAME: &str = "main.c";
pub const LIB_HEADER_PATH: &str = "include/lib.h";
pub const CLANG_TIDY_FILENAME: &str = ".clang-tidy";
pub const CLANG_FORMAT_FILENAME: &str = ".clang-format";

/// Values substituted into the templates besides the user's answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContext {
    pub year: i32,
    /// Basename of the project root, used in banners and the main header name.
    pub directory_name: String,
}

impl TemplateContext {
    /// Builds the context for `root` using the current local year.
    pub fn for_root(root: &Path) -> Result<Self> {
        let directory_name = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .with_context(|| format!("cannot derive a project name from {}", root.display()))?;

        Ok(Self {
            year: chrono::Local::now().year(),
            directory_name,
        })
    }

    fn header_path(&self) -> String {
        format!("include/{}.h", self.directory_name)
    }
}

/// Maps the answers onto the directories and files to create. Does no I/O.
pub fn render(answers: &Answers, ctx: &TemplateContext) -> OutputSet {
    let mut directories = vec![PathBuf::from("include"), PathBuf::from("src")];
    if answers.lib {
        directories.push(PathBuf::from("lib"));
    }
    if answers.unit_tests {
        directories.push(PathBuf::from("tests"));
    }

    let mut files = vec![
        overwrite(GITIGNORE_FILENAME, gitignore(&answers.binary_name)),
        overwrite(MAKEFILE_FILENAME, makefile(answers, ctx)),
    ];

    if answers.unit_tests {
        files.push(overwrite(TEST_MAKEFILE_PATH, test_makefile(answers.epitech_header, ctx)));
    }

    files.push(OutputFile {
        path: PathBuf::from(MAIN_FILENAME),
        contents: with_c_banner(answers.epitech_header, ctx, MAIN_FILENAME, MAIN_CONTENT),
        policy: WritePolicy::KeepExisting,
    });

    let header_path = ctx.header_path();
    let header_name = format!("{}.h", ctx.directory_name);
    files.push(overwrite(
        &header_path,
        with_c_banner(answers.epitech_header, ctx, &header_name, PRAGMA_ONCE),
    ));
    if answers.lib {
        files.push(overwrite(
            LIB_HEADER_PATH,
            with_c_banner(answers.epitech_header, ctx, "lib.h", PRAGMA_ONCE),
        ));
    }

    if answers.mode == InitMode::Classic {
        files.push(overwrite(CLANG_TIDY_FILENAME, CLANG_TIDY_CONTENT.to_string()));
        files.push(overwrite(CLANG_FORMAT_FILENAME, CLANG_FORMAT_CONTENT.to_string()));
    }

    OutputSet { directories, files }
}

fn overwrite(path: &str, contents: String) -> OutputFile {
    OutputFile {
        path: PathBuf::from(path),
        contents,
        policy: WritePolicy::Overwrite,
    }
}

fn c_banner(ctx: &TemplateContext, file: &str) -> String {
    let year = ctx.year;
    let dir = &ctx.directory_name;
    format!("/*\n** EPITECH PROJECT, {year}\n** {dir}\n** File description:\n** {file}\n*/\n")
}

fn makefile_banner(ctx: &TemplateContext, file: &str) -> String {
    let year = ctx.year;
    let dir = &ctx.directory_name;
    format!("##\n## EPITECH PROJECT, {year}\n## {dir}\n## File description:\n## {file}\n##\n")
}

fn with_c_banner(enabled: bool, ctx: &TemplateContext, file: &str, body: &str) -> String {
    if enabled {
        c_banner(ctx, file) + body
    } else {
        body.to_string()
    }
}

fn gitignore(binary_name: &str) -> String {
    format!("{GITIGNORE_CONTENT}{binary_name}")
}

fn makefile(answers: &Answers, ctx: &TemplateContext) -> String {
    let header = if answers.epitech_header {
        makefile_banner(ctx, MAKEFILE_FILENAME)
    } else {
        String::new()
    };
    let name = &answers.binary_name;
    let lib_sources = if answers.lib { "$(wildcard lib/*.c) \\" } else { "" };
    let tests_clean = if answers.unit_tests { "\tmake -C tests fclean\n" } else { "" };
    let tests_run = if answers.unit_tests { "tests_run:\n\tmake -C tests all\n" } else { "" };

    format!(
        "{header}
CC ?=gcc
RM = rm -f

NAME = {name}
SRCS = $(wildcard *.c) \\
       {lib_sources}
       $(wildcard src/*.c) \\

OBJS = $(SRCS:.c=.o)
DEPS = $(OBJS:.o=.d)

CFLAGS += -Wall -Wextra -I include -g3

all: $(NAME)

$(NAME): $(OBJS)
\t$(CC) $(CFLAGS) -o $(NAME) $(OBJS)

-include $(DEPS)

%.o: %.c
\t$(CC) $(CFLAGS) -MMD -c $< -o $@

clean:
\t$(RM) $(OBJS)
\t$(RM) $(DEPS)
{tests_clean}

fclean: clean
\t$(RM) $(NAME)
\t$(RM) $(wildcard vgcore*)

re: fclean all

{tests_run}

.PHONY: all clean fclean re tests_run
"
    )
}

fn test_makefile(epitech_header: bool, ctx: &TemplateContext) -> String {
    let header = if epitech_header {
        makefile_banner(ctx, MAKEFILE_FILENAME)
    } else {
        String::new()
    };

    format!(
        "{header}
CC\t=\tgcc --coverage -g3 -I ../include

RM\t=\trm -f

TARGET\t=\tunit-tests

SRCS\t=\t$(wildcard *.c) \\
\t\t\t$(wildcard ../lib/*.c) \\
\t\t\t$(wildcard ../src/*.c) \\

SRCS\t:=\t$(filter-out ../main.c, $(SRCS))


OBJ\t=\t$(SRCS:.c=.o)


CFLAGS\t=\t-Wall -Wextra


all\t:\t$(TARGET)
\t\t./$(TARGET)


$(TARGET)\t:\t$(OBJ)
\t$(CC) $(CFLAGS) -o $(TARGET) $(OBJ) -lcriterion


clean\t:
\t\t$(RM) $(OBJ)


fclean\t:\tclean
\t\t\t$(RM) $(TARGET)
\t\t\t$(RM) $(wildcard ../lib/*.gcno)
\t\t\t$(RM) $(wildcard ../lib/*.gcda)
\t\t\t$(RM) $(wildcard ../src/*.gcno)
\t\t\t$(RM) $(wildcard ../src/*.gcda)
\t\t\t$(RM) $(wildcard *.gcno)
\t\t\t$(RM) $(wildcard *.gcda)

re\t:\tfclean all

.PHONY: all clean fclean re
"
    )
}

const PRAGMA_ONCE: &str = "\n#pragma once";

const MAIN_CONTENT: &str = "\n#include <stdio.h>\n\nint main(__attribute__((unused)) int argc, __attribute__((unused)) char const * argv[])\n{\n\tprintf(\"Hello, World!\\n\");\n\treturn 0;\n}";

const GITIGNORE_CONTENT: &str = r#"
# Prerequisites
*.d

# Object files
*.o
*.ko
*.obj
*.elf

# Linker output
*.ilk
*.map
*.exp

# Precompiled Headers
*.gch
*.pch

# Libraries
*.lib
*.a
*.la
*.lo

# Shared objects (inc. Windows DLLs)
*.dll
*.so
*.so.*
*.dylib

# Executables
*.exe
*.out
*.app
*.i*86
*.x86_64
*.hex

# Debug files
*.dSYM/
*.su
*.idb
*.pdb

# Kernel Module Compile Results
*.mod*
*.cmd
.tmp_versions/
modules.order
Module.symvers
Mkfile.old
dkms.conf

# Binary files
"#;

const CLANG_FORMAT_CONTENT: &str = r#"Language: Cpp
BasedOnStyle: Google
AccessModifierOffset: -2
AlignAfterOpenBracket: Align
AlignConsecutiveAssignments: None
AlignOperands: Align
AllowAllArgumentsOnNextLine: true
AllowAllConstructorInitializersOnNextLine: true
AllowAllParametersOfDeclarationOnNextLine: false
AllowShortBlocksOnASingleLine: Empty
AllowShortCaseLabelsOnASingleLine: false
AllowShortFunctionsOnASingleLine: Inline
AllowShortIfStatementsOnASingleLine: Never # To avoid conflict, set this "Never" and each "if statement" should include brace when coding
AllowShortLambdasOnASingleLine: Inline
AllowShortLoopsOnASingleLine: false
AlwaysBreakAfterReturnType: None
AlwaysBreakTemplateDeclarations: Yes
BinPackArguments: true
BreakBeforeBraces: Custom
BraceWrapping:
  AfterFunction: true
  AfterCaseLabel: false
  AfterClass: false
  AfterStruct: false
  AfterControlStatement: Never
  AfterEnum: false
  AfterNamespace: false
  AfterUnion: false
  AfterExternBlock: false
  BeforeCatch: false
  BeforeElse: false
  BeforeLambdaBody: false
  IndentBraces: false
  SplitEmptyFunction: false
  SplitEmptyRecord: false
  SplitEmptyNamespace: false
BreakBeforeBinaryOperators: None
BreakBeforeTernaryOperators: true
BreakConstructorInitializers: BeforeColon
BreakInheritanceList: BeforeColon
ColumnLimit: 80
CompactNamespaces: false
ContinuationIndentWidth: 4
Cpp11BracedListStyle: true
DerivePointerAlignment: false # Make sure the * or & align on the left
EmptyLineBeforeAccessModifier: LogicalBlock
FixNamespaceComments: true
IncludeBlocks: Preserve
IndentCaseLabels: true
IndentWidth: 4
KeepEmptyLinesAtTheStartOfBlocks: true
MaxEmptyLinesToKeep: 1
NamespaceIndentation: None
ObjCSpaceAfterProperty: false
ObjCSpaceBeforeProtocolList: true
PointerAlignment: Left
ReflowComments: false
SeparateDefinitionBlocks: Always # Only support for clang-format 14
SpaceAfterCStyleCast: false
SpaceAfterLogicalNot: false
SpaceAfterTemplateKeyword: true
SpaceBeforeAssignmentOperators: true
SpaceBeforeCpp11BracedList: false
SpaceBeforeCtorInitializerColon: true
SpaceBeforeInheritanceColon: true
SpaceBeforeParens: ControlStatements
SpaceBeforeRangeBasedForLoopColon: true
SpaceBeforeSquareBrackets: false
SpaceInEmptyParentheses: false
SpacesBeforeTrailingComments: 2
SpacesInAngles: false
SpacesInCStyleCastParentheses: false
SpacesInContainerLiterals: false
SpacesInParentheses: false
SpacesInSquareBrackets: false
Standard: c++11
TabWidth: 4
UseTab: Never
IndentPPDirectives: AfterHash
"#;

const CLANG_TIDY_CONTENT: &str = r#"# Generated from CLion Inspection settings
---
Checks: '-*,
bugprone-argument-comment,
bugprone-assert-side-effect,
bugprone-bad-signal-to-kill-thread,
bugprone-branch-clone,
bugprone-copy-constructor-init,
bugprone-dangling-handle,
bugprone-dynamic-static-initializers,
bugprone-fold-init-type,
bugprone-forward-declaration-namespace,
bugprone-forwarding-reference-overload,
bugprone-inaccurate-erase,
bugprone-incorrect-roundings,
bugprone-integer-division,
bugprone-lambda-function-name,
bugprone-macro-parentheses,
bugprone-macro-repeated-side-effects,
bugprone-misplaced-operator-in-strlen-in-alloc,
bugprone-misplaced-pointer-arithmetic-in-alloc,
bugprone-misplaced-widening-cast,
bugprone-move-forwarding-reference,
bugprone-multiple-statement-macro,
bugprone-no-escape,
bugprone-not-null-terminated-result,
bugprone-parent-virtual-call,
bugprone-posix-return,
bugprone-reserved-identifier,
bugprone-sizeof-container,
bugprone-sizeof-expression,
bugprone-spuriously-wake-up-functions,
bugprone-string-constructor,
bugprone-string-integer-assignment,
bugprone-string-literal-with-embedded-nul,
bugprone-suspicious-enum-usage,
bugprone-suspicious-include,
bugprone-suspicious-memory-comparison,
bugprone-suspicious-memset-usage,
bugprone-suspicious-missing-comma,
bugprone-suspicious-semicolon,
bugprone-suspicious-string-compare,
bugprone-swapped-arguments,
bugprone-terminating-continue,
bugprone-throw-keyword-missing,
bugprone-too-small-loop-variable,
bugprone-undefined-memory-manipulation,
bugprone-undelegated-constructor,
bugprone-unhandled-self-assignment,
bugprone-unused-raii,
bugprone-unused-return-value,
bugprone-use-after-move,
bugprone-virtual-near-miss,
cert-dcl21-cpp,
cert-dcl58-cpp,
cert-err34-c,
cert-err52-cpp,
cert-err60-cpp,
cert-flp30-c,
cert-msc50-cpp,
cert-msc51-cpp,
cert-str34-c,
cppcoreguidelines-interfaces-global-init,
cppcoreguidelines-narrowing-conversions,
cppcoreguidelines-pro-type-member-init,
cppcoreguidelines-pro-type-static-cast-downcast,
cppcoreguidelines-slicing,
google-default-arguments,
google-explicit-constructor,
google-runtime-operator,
hicpp-exception-baseclass,
hicpp-multiway-paths-covered,
misc-misplaced-const,
misc-new-delete-overloads,
misc-no-recursion,
misc-non-copyable-objects,
misc-throw-by-value-catch-by-reference,
misc-unconventional-assign-operator,
misc-uniqueptr-reset-release,
modernize-avoid-bind,
modernize-concat-nested-namespaces,
modernize-deprecated-headers,
modernize-deprecated-ios-base-aliases,
modernize-loop-convert,
modernize-make-shared,
modernize-make-unique,
modernize-pass-by-value,
modernize-raw-string-literal,
modernize-redundant-void-arg,
modernize-replace-auto-ptr,
modernize-replace-disallow-copy-and-assign-macro,
modernize-replace-random-shuffle,
modernize-return-braced-init-list,
modernize-shrink-to-fit,
modernize-unary-static-assert,
modernize-use-auto,
modernize-use-bool-literals,
modernize-use-emplace,
modernize-use-equals-default,
modernize-use-equals-delete,
modernize-use-nodiscard,
modernize-use-noexcept,
modernize-use-nullptr,
modernize-use-override,
modernize-use-transparent-functors,
modernize-use-uncaught-exceptions,
mpi-buffer-deref,
mpi-type-mismatch,
openmp-use-default-none,
performance-faster-string-find,
performance-for-range-copy,
performance-implicit-conversion-in-loop,
performance-inefficient-algorithm,
performance-inefficient-string-concatenation,
performance-inefficient-vector-operation,
performance-move-const-arg,
performance-move-constructor-init,
performance-no-automatic-move,
performance-noexcept-move-constructor,
performance-trivially-destructible,
performance-type-promotion-in-math-fn,
performance-unnecessary-copy-initialization,
performance-unnecessary-value-param,
portability-simd-intrinsics,
readability-avoid-const-params-in-decls,
readability-const-return-type,
readability-container-size-empty,
readability-convert-member-functions-to-static,
readability-delete-null-pointer,
readability-deleted-default,
readability-inconsistent-declaration-parameter-name,
readability-make-member-function-const,
readability-misleading-indentation,
readability-misplaced-array-index,
readability-non-const-parameter,
readability-redundant-control-flow,
readability-redundant-declaration,
readability-redundant-function-ptr-dereference,
readability-redundant-smartptr-get,
readability-redundant-string-cstr,
readability-redundant-string-init,
readability-simplify-subscript-expr,
readability-static-accessed-through-instance,
readability-static-definition-in-anonymous-namespace,
readability-string-compare,
readability-uniqueptr-delete-release,
readability-use-anyofallof'
"#;
